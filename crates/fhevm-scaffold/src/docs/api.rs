//! Hand-authored API reference.
//!
//! Static content describing the known public entry points of the
//! example contracts; deliberately not derived from source scanning.

/// The API reference document, written as-is.
pub const API_REFERENCE: &str = r"# API Reference

Public entry points of the example contracts.

## Counter

- `getCount() -> uint32` — current counter value.
- `increment(uint32 value)` — add `value` to the counter.
- `decrement(uint32 value)` — subtract `value`; reverts on underflow.

## FHECounter

- `getCount() -> euint32` — encrypted counter value; decrypt off-chain
  with the relayer SDK.
- `increment(externalEuint32 inputEuint32, bytes inputProof)` — add an
  encrypted value to the counter.
- `decrement(externalEuint32 inputEuint32, bytes inputProof)` — subtract
  an encrypted value from the counter.

## ArtifactAuction

- `bid(externalEuint64 encryptedAmount, bytes inputProof)` — place or
  raise an encrypted bid.
- `endAuction()` — close bidding and request winner decryption from the
  oracle.
- `resolveAuctionCallback(uint256 requestId, bytes cleartexts, bytes proof)` —
  oracle callback settling the winning bid after signature verification.
- `claimArtifact()` — transfer the artifact to the winner after
  resolution.
";
