use bitpat::prelude::*;

fn lit(bits: &[u8]) -> Pattern {
    Pattern::new(bits.iter().map(|b| PatternPart::Literal(*b)).collect()).unwrap()
}

#[test]
fn literal_pattern() {
    let p = lit(&[0, 0, 0, 1]);
    assert_eq!(4, p.bit_length());
    assert!(p.matches(0b0001));
    assert!(!p.matches(0b0010));
}

#[test]
fn variable_middle() {
    let p = Pattern::new(vec![
        PatternPart::zero(),
        PatternPart::var(2, "c"),
        PatternPart::one(),
    ])
    .unwrap();
    assert_eq!(4, p.bit_length());
    assert!(p.matches(0b0001));
    assert!(p.matches(0b0111));
}

#[test]
fn group_picks_most_specific() {
    let exact = lit(&[0, 1, 0, 1]);
    let group = PatternGroup::new([
        exact.clone(),
        lit(&[0, 0, 0, 0]),
        Pattern::new(vec![
            PatternPart::zero(),
            PatternPart::var(2, "c"),
            PatternPart::one(),
        ])
        .unwrap(),
        Pattern::new(vec![PatternPart::zero(), PatternPart::var(3, "d")]).unwrap(),
    ]);
    let winner = group.resolve(0b0101).unwrap().unwrap();
    assert_eq!(&exact, winner.pattern.as_ref());
    assert_eq!(4, winner.pattern.specificity());
}

#[test]
fn equal_specificity_conflicts() {
    let group = PatternGroup::new([
        Pattern::new(vec![PatternPart::var(4, "a")]).unwrap(),
        Pattern::new(vec![PatternPart::var(2, "b"), PatternPart::var(2, "c")]).unwrap(),
    ]);
    for input in 0..16 {
        match group.resolve(input) {
            Err(Error::AmbiguousMatch {
                input: i,
                specificity,
                ..
            }) => {
                assert_eq!(input, i);
                assert_eq!(0, specificity);
            }
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }
}

#[test]
fn nothing_matches() {
    let empty: PatternGroup = PatternGroup::default();
    for input in [0, 1, 0xdead_beef, u64::MAX] {
        assert!(empty.resolve(input).unwrap().is_none());
    }

    let group = PatternGroup::new([lit(&[1, 1, 1, 1])]);
    assert!(group.resolve(0b0111).unwrap().is_none());
}

#[test]
fn decoder_fields() {
    // 16 bit encoding: opcode 4 bits, two 3-bit register fields, 6-bit immediate
    let add: Pattern = "0 0 0 1 rd{3} rs{3} imm{6}".parse().unwrap();
    let nop: Pattern = "0 0 0 1 0 0 0 0 0 0 0 0 0 0 0 0".parse().unwrap();
    let group = PatternGroup::with_data([(add, "add"), (nop, "nop")]);

    let m = group.resolve(0x1abc).unwrap().unwrap();
    assert_eq!("add", m.data);
    let rd = m.pattern.field("rd").unwrap();
    assert_eq!((9, 3), (rd.lsb, rd.width));
    assert_eq!(0x3f, m.pattern.field("imm").unwrap().mask());

    assert_eq!("nop", group.resolve(0x1000).unwrap().unwrap().data);
    assert!(group.resolve(0x2000).unwrap().is_none());
}
