/// Metadata for one scaffoldable example.
///
/// Paths are relative to the example-source root passed to the
/// generators. The key doubles as the output folder name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleDescriptor {
    pub key: &'static str,
    pub contract_path: &'static str,
    pub test_path: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

/// A named, ordered group of examples presented together.
///
/// `members` holds example keys; their order here is the order they
/// appear in generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub key: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub members: &'static [&'static str],
}
