// Host-side tests for slide activation bookkeeping.

use folio_core::{SlideDeck, SlideMark};

#[test]
fn first_slide_starts_active() {
    let deck = SlideDeck::new(4);
    assert_eq!(deck.active(), Some(0));
    assert_eq!(
        deck.marks(),
        vec![SlideMark::Active, SlideMark::Plain, SlideMark::Plain, SlideMark::Plain]
    );
}

#[test]
fn empty_deck_has_nothing_to_mark() {
    let mut deck = SlideDeck::new(0);
    assert!(deck.is_empty());
    assert_eq!(deck.active(), None);
    assert!(deck.marks().is_empty());
    assert_eq!(deck.activate(0), None);
}

#[test]
fn exactly_one_active_and_predecessors_faded() {
    let mut deck = SlideDeck::new(5);
    for target in [3, 1, 4, 0, 2] {
        let marks = deck.activate(target).unwrap();
        assert_eq!(marks.iter().filter(|m| **m == SlideMark::Active).count(), 1);
        for (i, m) in marks.iter().enumerate() {
            let expected = if i < target {
                SlideMark::Faded
            } else if i == target {
                SlideMark::Active
            } else {
                SlideMark::Plain
            };
            assert_eq!(*m, expected, "slide {i} with {target} active");
        }
    }
}

#[test]
fn out_of_range_activation_keeps_state() {
    let mut deck = SlideDeck::new(2);
    deck.activate(1);
    assert_eq!(deck.activate(2), None);
    assert_eq!(deck.active(), Some(1));
}
