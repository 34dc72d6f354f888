//! Trunk binary target. The browser build enables `csr`; native builds have
//! nothing to mount.

fn main() {
    #[cfg(feature = "csr")]
    portfolio_client::mount();
}
