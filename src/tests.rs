use std::fs;

use crate as bitseq;
use crate::rng::{wyhash, INCREMENT};

#[test]
fn generated_sequences_are_well_formed() {
    use bitseq::{Bit, Sequence, SEQUENCE_LEN};

    for _ in 0..32 {
        let sequence = Sequence::generate();
        assert_eq!(sequence.len(), SEQUENCE_LEN);
        assert!(sequence
            .iter()
            .all(|bit| matches!(u8::from(bit), 0 | 1) && (bit == Bit::Zero || bit == Bit::One)));
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    use bitseq::{Rng, Sequence};

    let a: Sequence = Rng::with_seed(1234).random();
    let b: Sequence = Rng::with_seed(1234).random();
    assert_eq!(a, b);

    let rng = Rng::with_seed(1234);
    let _: Sequence = rng.random();
    rng.reseed(1234);
    assert_eq!(rng.random::<Sequence>(), a);
}

#[test]
fn one_draw_per_bit() {
    use bitseq::{Bit, Rng, Sequence};

    let rng = Rng::with_seed(99);
    let sequence: Sequence = rng.random();
    assert_eq!(
        rng.state.get(),
        99_u64.wrapping_add(INCREMENT.wrapping_mul(sequence.len() as u64))
    );

    // Each bit is the top bit of the hash of the matching Weyl state.
    let mut state = 99_u64;
    for bit in &sequence {
        assert_eq!(bit, Bit::from(wyhash(state) >> 63 == 1));
        state = state.wrapping_add(INCREMENT);
    }
}

#[test]
fn bits_are_roughly_balanced() {
    use bitseq::{Bit, Rng, Sequence};

    // 12_800 draws; the bound is more than seven standard deviations wide.
    let rng = Rng::with_seed(0xDEADBEEF);
    let ones: usize = (0..100)
        .map(|_| {
            rng.random::<Sequence>()
                .iter()
                .filter(|&bit| bit == Bit::One)
                .count()
        })
        .sum();
    assert!((6000..=6800).contains(&ones), "{ones} ones out of 12800");
}

#[test]
fn ascii_form() {
    use bitseq::{Rng, Sequence};

    let sequence: Sequence = Rng::with_seed(5).random();
    let ascii = sequence.to_ascii();
    assert_eq!(ascii.len(), 128);
    assert!(ascii.iter().all(|&byte| byte == 0x30 || byte == 0x31));
    assert_eq!(sequence.to_string().as_bytes(), &ascii[..]);
}

#[test]
fn parse_sequence() {
    use bitseq::{Error, Sequence};

    let text = "01".repeat(64);
    let sequence: Sequence = text.parse().unwrap();
    assert_eq!(sequence.to_string(), text);

    assert!(matches!("0101".parse::<Sequence>(), Err(Error::Parse(_))));
    assert!(matches!(
        format!("{text}\n").parse::<Sequence>(),
        Err(Error::Parse(_))
    ));
    let bad = format!("2{}", &text[1..]);
    assert!(matches!(bad.parse::<Sequence>(), Err(Error::Parse(_))));
}

#[test]
fn write_and_read_back() {
    use bitseq::{read_sequence, write_sequence, Rng, Sequence};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sequence.txt");
    let sequence: Sequence = Rng::with_seed(77).random();

    write_sequence(&path, &sequence).unwrap();
    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes, sequence.to_ascii());
    assert_eq!(read_sequence(&path).unwrap(), sequence);
}

#[test]
fn write_truncates_existing_file() {
    use bitseq::{write_sequence, Sequence};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sequence.txt");
    fs::write(&path, "x".repeat(1000)).unwrap();

    write_sequence(&path, &Sequence::generate()).unwrap();
    write_sequence(&path, &Sequence::generate()).unwrap();
    assert_eq!(fs::metadata(&path).unwrap().len(), 128);
}

#[test]
fn open_failure_writes_nothing() {
    use bitseq::{Error, SequenceFile};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("sequence.txt");

    let err = SequenceFile::create(&path).unwrap_err();
    assert!(matches!(err, Error::FileOpen { .. }));
    assert!(err.to_string().contains("sequence.txt"));
    assert!(!path.exists());
}

#[test]
fn rand_core() {
    use bitseq::{Rng, Sequence};
    use rand::{RngCore, SeedableRng};

    let mut rng = &Rng::from_seed([0; 8]);
    let mut buffer = [0; 32];
    rng.fill_bytes(&mut buffer);
    assert_ne!(buffer, [0; 32]);

    let a = Sequence::from_rng(&mut &Rng::from_seed([3; 8]));
    let b = Sequence::from_rng(&mut &Rng::from_seed([3; 8]));
    assert_eq!(a, b);
    assert_eq!(a, Rng::from_seed([3; 8]).random::<Sequence>());
}

#[test]
fn bytes_fills_partial_chunks() {
    use bitseq::Rng;

    let rng = Rng::with_seed(11);
    let mut buffer = [0_u8; 13];
    rng.bytes(&mut buffer);

    let rng = Rng::with_seed(11);
    let first = rng.random::<u64>().to_ne_bytes();
    let second = rng.random::<u64>().to_ne_bytes();
    assert_eq!(&buffer[..8], &first);
    assert_eq!(&buffer[8..], &second[..5]);
}
