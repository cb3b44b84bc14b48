#![no_main]
// Every decoder of every curve on the same input: accept or reject, never panic
use eckeys::{Curve, NistP256, NistP384, NistP521, PrivateKey, PublicKey, tlv};
use libfuzzer_sys::fuzz_target;

fn decode<C: Curve>(data: &[u8]) {
    let _ = PublicKey::<C>::from_x963(data);
    let _ = PublicKey::<C>::from_der(data);
    let _ = PublicKey::<C>::from_raw(data);
    let _ = PrivateKey::<C>::from_x963(data);
    let _ = PrivateKey::<C>::from_der_with_public(data);

    // split the input into private and public DER
    let split = usize::from(data.first().copied().unwrap_or(0)).min(data.len());
    let (private_der, public_der) = data.split_at(split);
    let _ = PrivateKey::<C>::from_der(private_der, public_der);
}

fuzz_target!(|data: &[u8]| {
    decode::<NistP256>(data);
    decode::<NistP384>(data);
    decode::<NistP521>(data);

    for offset in 0..data.len().min(16) {
        if let Ok((len, consumed)) = tlv::read_length(data, offset) {
            assert!(offset + consumed + len <= data.len());
        }
    }
});
