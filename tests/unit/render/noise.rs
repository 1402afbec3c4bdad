use super::*;

const SMALL: Canvas = Canvas {
    width: 64,
    height: 64,
};

#[test]
fn zero_frames_is_rejected() {
    assert!(NoiseFrames::generate(SMALL, 0, 1).is_err());
}

#[test]
fn pixels_are_either_noise_or_transparent() {
    let noise = NoiseFrames::generate(SMALL, NOISE_FRAME_COUNT, 7).unwrap();
    assert_eq!(noise.len(), 10);
    let mut lit = 0usize;
    for frame in noise.frames() {
        for px in frame.data.chunks_exact(4) {
            if px == NOISE_PIXEL {
                lit += 1;
            } else {
                assert_eq!(px, [0, 0, 0, 0]);
            }
        }
    }
    let total = SMALL.pixel_count() * noise.len();
    let share = lit as f64 / total as f64;
    assert!((0.27..0.33).contains(&share), "share={share}");
}

#[test]
fn frames_differ_and_seeds_replay() {
    let a = NoiseFrames::generate(SMALL, 3, 42).unwrap();
    let b = NoiseFrames::generate(SMALL, 3, 42).unwrap();
    assert_eq!(a.frames(), b.frames());
    assert_ne!(a.frames()[0], a.frames()[1]);
}

#[test]
fn frame_at_cycles_at_25_hz() {
    let noise = NoiseFrames::generate(SMALL, 10, 1).unwrap();
    assert_eq!(noise.index_at(0), 0);
    assert_eq!(noise.index_at(39), 0);
    assert_eq!(noise.index_at(40), 1);
    assert_eq!(noise.index_at(360), 9);
    assert_eq!(noise.index_at(400), 0);
    assert_eq!(noise.frame_at(440), &noise.frames()[1]);
}
