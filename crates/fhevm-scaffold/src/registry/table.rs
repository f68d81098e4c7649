use crate::error::Warning;
use crate::registry::types::{CategoryDescriptor, ExampleDescriptor};

/// Prefix for generated package names and default output folders.
pub const PACKAGE_PREFIX: &str = "fhevm";

/// The example table. Immutable configuration data; order here is
/// presentation order for listings and `--all` documentation runs.
static EXAMPLES: &[ExampleDescriptor] = &[
    ExampleDescriptor {
        key: "counter",
        contract_path: "contracts/Counter.sol",
        test_path: "test/Counter.ts",
        description: "Simple incrementing counter without encryption",
        category: "basic",
    },
    ExampleDescriptor {
        key: "fhe-counter",
        contract_path: "contracts/FHECounter.sol",
        test_path: "test/FHECounter.ts",
        description: "Counter operating on FHE-encrypted values",
        category: "basic",
    },
    ExampleDescriptor {
        key: "artifact-auction",
        contract_path: "contracts/ArtifactAuction.sol",
        test_path: "test/ArtifactAuction.ts",
        description: "Confidential artifact auction with encrypted bids and authentication",
        category: "auction",
    },
];

/// The category table. Member order is presentation order.
static CATEGORIES: &[CategoryDescriptor] = &[
    CategoryDescriptor {
        key: "basic",
        display_name: "Basic Examples",
        description: "Plain and FHE-encrypted counters for getting started",
        members: &["counter", "fhe-counter"],
    },
    CategoryDescriptor {
        key: "auction",
        display_name: "Auction Examples",
        description: "Confidential auctions built on encrypted bids",
        members: &["artifact-auction"],
    },
];

/// All examples in presentation order.
pub fn examples() -> &'static [ExampleDescriptor] {
    EXAMPLES
}

/// All categories in presentation order.
pub fn categories() -> &'static [CategoryDescriptor] {
    CATEGORIES
}

/// Look up an example by key.
pub fn find_example(key: &str) -> Option<&'static ExampleDescriptor> {
    EXAMPLES.iter().find(|e| e.key == key)
}

/// Look up a category by key.
pub fn find_category(key: &str) -> Option<&'static CategoryDescriptor> {
    CATEGORIES.iter().find(|c| c.key == key)
}

/// Package name for a generated single-example project.
pub fn package_name(key: &str) -> String {
    format!("{PACKAGE_PREFIX}-{key}")
}

/// Package name for a generated category project.
pub fn category_package_name(key: &str) -> String {
    format!("{PACKAGE_PREFIX}-{key}-examples")
}

/// Cross-check the two tables.
///
/// A category member that does not resolve to a known example is a
/// soft failure: generation skips it, so here it is only a warning.
pub fn validate() -> Vec<Warning> {
    let mut warnings = Vec::new();
    for cat in CATEGORIES {
        for member in cat.members {
            if find_example(member).is_none() {
                warnings.push(Warning::new(format!(
                    "category '{}' references unknown example '{member}'",
                    cat.key
                )));
            }
        }
    }
    warnings
}
