//! Minimal `mum-hash` usage example.
//!
//! Run with `cargo run --example simple`.

fn main() {
    let data = b"Hello, World!";
    let digest = mum_hash::hash64(data, 0);

    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("MUM64: {digest:016x}");

    let wide = mum_hash::hash512(data, [0, 0]);
    println!("MUM512: {wide}");

    println!("Active vector backend: {}", mum_hash::active_backend());
}
