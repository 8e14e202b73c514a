use golay_core::channel::flip_bit;

fn main() {
    tracing_subscriber::fmt::init();

    let telemetry = b"ALT=01234m";
    // Pad to a whole number of 3-byte blocks.
    let mut payload = telemetry.to_vec();
    payload.resize(payload.len().div_ceil(3) * 3, 0);

    let mut frame = golay_core::encode(&payload, Vec::with_capacity(golay_core::encoded_len(payload.len())));
    println!("sent    {:02x?}", frame);

    // Three hits inside the first codeword, one in the second.
    for bit in [0, 9, 17, 30] {
        flip_bit(&mut frame, bit);
    }
    println!("damaged {:02x?}", frame);

    let (corrected, decoded) = golay_core::decode(&frame, Vec::new());
    println!("corrected {} words -> {:?}", corrected, String::from_utf8_lossy(&decoded[..telemetry.len()]));
    assert_eq!(decoded, payload);
}
