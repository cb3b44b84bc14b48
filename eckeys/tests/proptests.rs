//! Property-based tests over arbitrary key material and arbitrary input.

use eckeys::{Curve, NistP256, NistP384, NistP521, PrivateKey, PublicKey, tlv};
use proptest::{collection::vec, prelude::*};

/// Arbitrary uncompressed point for `C`. Not necessarily on the curve, which
/// the codecs do not check.
fn point<C: Curve>() -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), 2 * C::PROFILE.coordinate_width).prop_map(|coordinates| {
        let mut point = vec![0x04];
        point.extend_from_slice(&coordinates);
        point
    })
}

fn scalar<C: Curve>() -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), C::PROFILE.coordinate_width)
}

fn check_round_trips<C: Curve>(point: &[u8], scalar: &[u8]) -> Result<(), TestCaseError> {
    let x963 = [point, scalar].concat();
    let private_key = PrivateKey::<C>::from_x963(&x963).unwrap();
    prop_assert_eq!(private_key.raw_scalar_bytes(), scalar);
    let encoded = private_key.to_x963();
    prop_assert_eq!(encoded.as_slice(), x963.as_slice());

    let public_der = private_key.public_key().to_der();
    let public_key = PublicKey::<C>::from_der(&public_der).unwrap();
    prop_assert_eq!(public_key.to_x963(), point);

    let decoded = PrivateKey::<C>::from_der(&private_key.to_der(), &public_der).unwrap();
    prop_assert_eq!(&decoded, &private_key);

    let decoded = PrivateKey::<C>::from_der_with_public(&private_key.to_der_with_public()).unwrap();
    prop_assert_eq!(&decoded, &private_key);

    Ok(())
}

/// Decoders reject or accept, but never panic.
fn decode_all<C: Curve>(bytes: &[u8]) {
    let _ = PublicKey::<C>::from_x963(bytes);
    let _ = PublicKey::<C>::from_der(bytes);
    let _ = PublicKey::<C>::from_raw(bytes);
    let _ = PrivateKey::<C>::from_x963(bytes);
    let _ = PrivateKey::<C>::from_der(bytes, bytes);
    let _ = PrivateKey::<C>::from_der_with_public(bytes);
}

proptest! {
    #[test]
    fn p256_round_trips(point in point::<NistP256>(), scalar in scalar::<NistP256>()) {
        check_round_trips::<NistP256>(&point, &scalar)?;
    }

    #[test]
    fn p384_round_trips(point in point::<NistP384>(), scalar in scalar::<NistP384>()) {
        check_round_trips::<NistP384>(&point, &scalar)?;
    }

    #[test]
    fn p521_round_trips(point in point::<NistP521>(), scalar in scalar::<NistP521>()) {
        check_round_trips::<NistP521>(&point, &scalar)?;
    }

    #[test]
    fn p521_truncated_scalars(
        point in point::<NistP521>(),
        scalar in scalar::<NistP521>(),
        zeros in 0usize..=2,
    ) {
        let mut scalar = scalar;
        scalar[..zeros].fill(0);

        // 02 01 01 04 <len> <scalar without its leading zeros>
        let prefix = NistP521::PROFILE.private_key_der_prefix;
        let mut der = prefix[..prefix.len() - 1].to_vec();
        der.push((66 - zeros) as u8);
        der.extend_from_slice(&scalar[zeros..]);

        let public_der = PublicKey::<NistP521>::from_x963(&point).unwrap().to_der();
        let private_key = PrivateKey::<NistP521>::from_der(&der, &public_der).unwrap();
        prop_assert_eq!(private_key.raw_scalar_bytes(), scalar.as_slice());
    }

    #[test]
    fn arbitrary_bytes(bytes in vec(any::<u8>(), 0..300)) {
        decode_all::<NistP256>(&bytes);
        decode_all::<NistP384>(&bytes);
        decode_all::<NistP521>(&bytes);

        for offset in 0..=bytes.len() {
            if let Ok((len, consumed)) = tlv::read_length(&bytes, offset) {
                prop_assert!(offset + consumed + len <= bytes.len());
            }
        }
    }

    #[test]
    fn marker_followed_by_arbitrary_bytes(
        head in vec(any::<u8>(), 0..40),
        tail in vec(any::<u8>(), 0..200),
    ) {
        let bytes = [head.as_slice(), &tlv::PRIVATE_KEY_MARKER[..], tail.as_slice()].concat();
        decode_all::<NistP256>(&bytes);
        decode_all::<NistP384>(&bytes);
        decode_all::<NistP521>(&bytes);
    }
}
