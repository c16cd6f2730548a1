//! rustls provider and root store helpers.

use rustls::crypto::CryptoProvider;
use rustls_pki_types::CertificateDer;
use std::sync::{Arc, OnceLock};

/// OS trust store, read on first use. Platform lookups are slow enough to be worth caching.
static OS_ROOTS: OnceLock<Vec<CertificateDer<'static>>> = OnceLock::new();

pub(crate) fn os_root_certs() -> &'static [CertificateDer<'static>] {
    OS_ROOTS.get_or_init(|| {
        let loaded = rustls_native_certs::load_native_certs();
        for err in &loaded.errors {
            tracing::warn!(error = %err, "skipping unreadable OS root certificate");
        }
        tracing::debug!(count = loaded.certs.len(), "OS root certificates loaded");
        loaded.certs
    })
}

/// Process-wide provider if the application installed one, aws-lc-rs otherwise.
pub(crate) fn crypto_provider() -> Arc<CryptoProvider> {
    CryptoProvider::get_default()
        .cloned()
        .unwrap_or_else(|| Arc::new(rustls::crypto::aws_lc_rs::default_provider()))
}

/// Client config trusting the OS store.
///
/// # Errors
///
/// A description of the problem when no usable root certificate is found.
pub(crate) fn os_roots_client_config() -> Result<rustls::ClientConfig, String> {
    let certs = os_root_certs();
    let mut roots = rustls::RootCertStore::empty();
    let (added, ignored) = roots.add_parsable_certificates(certs.iter().cloned());

    if added == 0 {
        return Err(format!(
            "OS trust store has no usable root certificates ({} found, {ignored} unparsable)",
            certs.len()
        ));
    }
    if ignored > 0 {
        tracing::warn!(added, ignored, "some OS root certificates were unparsable");
    }

    let builder = rustls::ClientConfig::builder_with_provider(crypto_provider())
        .with_safe_default_protocol_versions()
        .map_err(|e| format!("no TLS protocol version available: {e}"))?;
    Ok(builder.with_root_certificates(roots).with_no_client_auth())
}
