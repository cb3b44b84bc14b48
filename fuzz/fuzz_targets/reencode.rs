#![no_main]
// Whatever decodes must re-encode to an equivalent key
use eckeys::{Curve, NistP256, NistP384, NistP521, PrivateKey};
use libfuzzer_sys::fuzz_target;

fn reencode<C: Curve>(data: &[u8]) {
    if let Ok(key) = PrivateKey::<C>::from_der_with_public(data) {
        let der = key.to_der_with_public();
        assert_eq!(PrivateKey::<C>::from_der_with_public(&der).unwrap(), key);

        let public_der = key.public_key().to_der();
        assert_eq!(
            PrivateKey::<C>::from_der(&key.to_der(), &public_der).unwrap(),
            key
        );
    }

    if let Ok(key) = PrivateKey::<C>::from_x963(data) {
        assert_eq!(key.to_x963().as_slice(), data);
    }
}

fuzz_target!(|data: &[u8]| {
    reencode::<NistP256>(data);
    reencode::<NistP384>(data);
    reencode::<NistP521>(data);
});
