//! Entry point for the WASM application

pub fn main() {
    neuroscan_frontend::start();
}
