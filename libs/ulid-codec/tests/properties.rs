//! Property tests for the ULID text codec, checked against the `ulid` and
//! `uuid` crates as independent references.

use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rstest::rstest;
use ulid_codec::alphabet::CROCKFORD;
use ulid_codec::{decode, encode, DecodeError, DecodeOptions, Ulid, ENCODED_LEN};

const LOOP_MAX: usize = 100_000;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,ulid_codec=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

fn crockford_char() -> impl Strategy<Value = char> {
    proptest::sample::select(CROCKFORD.symbols().to_vec()).prop_map(char::from)
}

/// Valid text: the first character is limited to `0`..`7` so the timestamp
/// fits in 48 bits.
fn valid_text() -> impl Strategy<Value = String> {
    (
        proptest::sample::select(b"01234567".to_vec()).prop_map(char::from),
        proptest::collection::vec(crockford_char(), ENCODED_LEN - 1),
    )
        .prop_map(|(first, rest)| std::iter::once(first).chain(rest).collect())
}

proptest! {
    #[test]
    fn value_text_value_roundtrip(high in any::<u64>(), low in any::<u64>()) {
        let ulid = Ulid::from_halves(high, low);
        let parsed = Ulid::parse(&ulid.format()).unwrap();
        prop_assert_eq!(parsed.to_halves(), (high, low));
    }

    #[test]
    fn text_value_text_roundtrip(text in valid_text()) {
        let ulid = Ulid::parse(&text).unwrap();
        prop_assert_eq!(ulid.format(), text);
    }

    #[test]
    fn format_is_26_crockford_symbols(high in any::<u64>(), low in any::<u64>()) {
        let text = encode(high, low);
        prop_assert_eq!(text.chars().count(), ENCODED_LEN);
        prop_assert!(text.bytes().all(|byte| CROCKFORD.contains(byte)));
    }

    #[test]
    fn timestamp_prefix_sorts_numerically(
        t1 in 0u64..=ulid_codec::TIMESTAMP_MAX,
        t2 in 0u64..=ulid_codec::TIMESTAMP_MAX,
        r1 in any::<u128>(),
        r2 in any::<u128>(),
    ) {
        let a = Ulid::from_parts(t1, r1).format();
        let b = Ulid::from_parts(t2, r2).format();
        prop_assert_eq!(t1.cmp(&t2), a[..10].cmp(&b[..10]));
    }

    #[test]
    fn matches_reference_encoder(value in any::<u128>()) {
        let ulid = Ulid::from(value);
        prop_assert_eq!(ulid.to_string(), ulid::Ulid(value).to_string());
    }

    #[test]
    fn lowercase_decodes_like_uppercase(text in valid_text()) {
        let lower = text.to_ascii_lowercase();
        prop_assert_eq!(Ulid::parse(&lower).unwrap(), Ulid::parse(&text).unwrap());
        let rejected = Ulid::parse_with(&lower, DecodeOptions::strict());
        prop_assert!(rejected.is_err() || lower == text);
    }
}

#[test]
fn random_pairs_roundtrip() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(0x0001_0000);
    for _ in 0..LOOP_MAX {
        let (high, low) = (rng.random::<u64>(), rng.random::<u64>());
        let text = encode(high, low);
        assert_eq!(decode(&text).unwrap(), (high, low), "{text}");
        assert_eq!(encode(high, low), text);
    }
}

#[test]
fn uuid_roundtrip() {
    for _ in 0..LOOP_MAX {
        let uuid = uuid::Uuid::new_v4();
        let ulid = Ulid::from(uuid);
        let parsed: Ulid = ulid.to_string().parse().unwrap();
        assert_eq!(parsed.to_uuid(), uuid);
    }
}

#[test]
fn reference_decoder_agrees() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..LOOP_MAX {
        let text = ulid::Ulid(rng.random::<u128>()).to_string();
        let ours = Ulid::parse(&text).unwrap();
        assert_eq!(u128::from(ours), ulid::Ulid::from_string(&text).unwrap().0);
    }
}

#[test]
fn edge_values() {
    assert_eq!(encode(0, 0), "00000000000000000000000000");
    assert_eq!(decode("00000000000000000000000000").unwrap(), (0, 0));
    assert_eq!(
        decode(&encode(u64::MAX, u64::MAX)).unwrap(),
        (u64::MAX, u64::MAX)
    );
}

#[rstest]
#[case("", 0)]
#[case("AAAAAAAAAAAAAAAAAAAAAAAAA", 25)]
#[case("AAAAAAAAAAAAAAAAAAAAAAAAAAA", 27)]
fn rejects_bad_length(#[case] text: &str, #[case] actual: usize) {
    init_tracing();
    let err = Ulid::parse(text).unwrap_err();
    assert!(err.is_length_error());
    assert_eq!(err, DecodeError::InvalidLength { actual });
}

#[rstest]
#[case("U0000000000000000000000000", 0, 'U')]
#[case("0000000000000000000000000I", 25, 'I')]
#[case("00000000000L00000000000000", 11, 'L')]
#[case("000000000000000000O0000000", 18, 'O')]
#[case("0000000000-000000000000000", 10, '-')]
#[case("u0000000000000000000000000", 0, 'u')]
fn rejects_bad_character(
    #[case] text: &str,
    #[case] position: usize,
    #[case] character: char,
) {
    let err = Ulid::parse(text).unwrap_err();
    assert!(err.is_character_error());
    assert_eq!(
        err,
        DecodeError::InvalidCharacter {
            position,
            character
        }
    );
}

#[rstest]
#[case("80000000000000000000000000")]
#[case("ZZZZZZZZZZZZZZZZZZZZZZZZZZ")]
fn rejects_timestamp_overflow(#[case] text: &str) {
    assert_eq!(Ulid::parse(text).unwrap_err(), DecodeError::Overflow);
}

#[test]
fn concurrent_codec_calls() {
    let handles: Vec<_> = (0..8u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                for _ in 0..10_000 {
                    let ulid = Ulid::from(rng.random::<u128>());
                    assert_eq!(Ulid::parse(&ulid.format()).unwrap(), ulid);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
