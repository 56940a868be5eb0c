//! A test that verifies the beat and counter behavior of [`Heartbeat`].

use heartbeat::Heartbeat;

#[test]
fn first_beat_lands_on_the_full_period() {
    let mut beat = Heartbeat::new(1000);

    for _ in 0..999 {
        assert!(!beat.tick());
    }
    assert!(beat.tick());
    assert_eq!(beat.ticks(), 0);
}

#[test]
fn beats_repeat_every_period() {
    let mut beat = Heartbeat::new(1000);
    let mut beat_instants = Vec::new();

    for tick in 1..=10_000_u32 {
        if beat.tick() {
            beat_instants.push(tick);
        }
    }

    let expected: Vec<u32> = (1..=10).map(|n| n * 1000).collect();
    assert_eq!(beat_instants, expected);
}

#[test]
fn count_never_reaches_the_period() {
    let mut beat = Heartbeat::new(1000);

    for _ in 0..10_000 {
        beat.tick();
        assert!(beat.ticks() < beat.period());
    }
}

#[test]
fn period_of_one_beats_on_every_tick() {
    let mut beat = Heartbeat::new(1);

    for _ in 0..100 {
        assert!(beat.tick());
        assert_eq!(beat.ticks(), 0);
    }
}

#[test]
#[should_panic(expected = "heartbeat period must be non-zero")]
fn zero_period_is_rejected() {
    let _ = Heartbeat::new(0);
}
