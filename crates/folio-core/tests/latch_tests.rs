// Host-side tests for the once-per-page fetch latch.

use folio_core::FetchLatch;

#[test]
fn first_claim_wins() {
    let latch = FetchLatch::new();
    assert!(!latch.is_claimed());
    assert!(latch.claim());
    assert!(latch.is_claimed());
}

#[test]
fn mounting_again_does_not_fetch_again() {
    // Unmount followed by another mount must not start a second request
    let latch = FetchLatch::default();
    let fetches = (0..3).filter(|_| latch.claim()).count();
    assert_eq!(fetches, 1);
    assert!(!latch.claim());
}
