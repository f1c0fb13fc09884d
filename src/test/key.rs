use crate::{
    error::Error,
    key::{CorrectionWord, Key, Party},
};

fn sample_key(n: u32, party: Party) -> Key {
    let cws = (0..n)
        .map(|i| CorrectionWord {
            s_cw: [i as u8; 16],
            t_cw_l: i % 2 == 0,
            t_cw_r: i % 3 == 0,
        })
        .collect();
    Key {
        party,
        root_seed: [0x42; 16],
        root_t: party.root_control_bit(),
        cws,
        cw_final: 123_456,
    }
}

#[test]
fn encode_decode_roundtrip() {
    for n in [1, 2, 8, 16, 20, 32, 64] {
        for party in [Party::Zero, Party::One] {
            let key = sample_key(n, party);
            let buf = key.encode();
            assert_eq!(buf.len(), Key::encoded_len(n));
            let decoded = Key::decode(n, &buf).unwrap();
            assert_eq!(decoded, key);
        }
    }
}

#[test]
fn k0_and_k1_differ_only_in_header() {
    let n = 8;
    let k0 = sample_key(n, Party::Zero);
    let mut k1 = k0.clone();
    k1.party = Party::One;
    k1.root_seed = [0x99; 16];
    k1.root_t = true;

    let b0 = k0.encode();
    let b1 = k1.encode();
    let mut diffs: Vec<usize> = (0..b0.len()).filter(|&i| b0[i] != b1[i]).collect();
    diffs.sort_unstable();
    let mut expected: Vec<usize> = (0..17).collect();
    expected.sort_unstable();
    assert_eq!(diffs, expected);
}

#[test]
fn wrong_length_is_rejected() {
    let key = sample_key(4, Party::Zero);
    let mut buf = key.encode();
    buf.push(0);
    assert!(matches!(
        Key::decode(4, &buf),
        Err(Error::InvalidKeyLength { .. })
    ));
}

#[test]
fn bad_party_tag_is_rejected() {
    let key = sample_key(4, Party::Zero);
    let mut buf = key.encode();
    buf[0] = 7;
    assert!(matches!(
        Key::decode(4, &buf),
        Err(Error::InvalidPartyTag(7))
    ));
}

#[test]
fn n_equals_1_has_length_52() {
    let key = sample_key(1, Party::Zero);
    assert_eq!(key.encode().len(), 52);
}
