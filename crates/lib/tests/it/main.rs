/*! Integration tests for Anexo.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - attrs: Tests for the attribute map engine (text grammar, map operations)
 * - store: Tests for the host-record layer (tables, attribute queries and updates)
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("anexo=info".parse().unwrap()))
        .with_test_writer()
        .try_init();
}

mod helpers;
mod store;
