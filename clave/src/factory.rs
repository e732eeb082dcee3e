//! Extensible OID-driven resolution of algorithm identifiers.

use clave_asn1::{AlgorithmIdentifier, RawAlgorithmIdentifier};
use picky_asn1_der::Asn1DerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlgorithmError {
    /// ASN1 serialization error
    #[error("(ASN1) couldn't serialize {element}: {source}")]
    Asn1Serialization {
        element: &'static str,
        source: Asn1DerError,
    },

    /// ASN1 deserialization error
    #[error("(ASN1) couldn't deserialize {element}: {source}")]
    Asn1Deserialization {
        element: &'static str,
        source: Asn1DerError,
    },

    /// provider failed to build an identifier for an OID it claimed
    #[error("provider rejected algorithm identifier: {context}")]
    Provider { context: String },
}

/// Resolution hook for algorithm identifiers outside the built-in table.
///
/// A provider claims OIDs through [`supports_oid`](Self::supports_oid) and
/// builds the resolved identifier from the structural form. Providers are
/// the extension point that lets other crates plug their own algorithms into
/// [`AlgorithmIdentifierFactory`] without touching this one.
pub trait AlgorithmIdentifierProvider {
    /// Whether this provider resolves identifiers with the given OID
    /// (dotted-decimal form).
    fn supports_oid(&self, oid: &str) -> bool;

    /// Build the resolved identifier for an OID this provider claimed.
    fn resolve(&self, raw: RawAlgorithmIdentifier) -> Result<AlgorithmIdentifier, AlgorithmError>;
}

/// Resolves DER algorithm-identifier sequences into [`AlgorithmIdentifier`]
/// values.
///
/// Providers are consulted in registration order; the first one claiming the
/// OID wins. Identifiers no provider claims go through the built-in table,
/// whose fallback is the generic passthrough variant, so resolution never
/// fails for a well-formed input. The provider list is fixed at construction
/// time: factories are immutable, and factories with different provider sets
/// can coexist without interfering.
#[derive(Default)]
pub struct AlgorithmIdentifierFactory {
    providers: Vec<Box<dyn AlgorithmIdentifierProvider>>,
}

impl AlgorithmIdentifierFactory {
    /// Factory backed by the built-in table only.
    pub fn new() -> Self {
        Self { providers: Vec::new() }
    }

    pub fn with_providers(providers: Vec<Box<dyn AlgorithmIdentifierProvider>>) -> Self {
        Self { providers }
    }

    /// Decode and resolve a DER algorithm-identifier sequence.
    pub fn parse<T: ?Sized + AsRef<[u8]>>(&self, der: &T) -> Result<AlgorithmIdentifier, AlgorithmError> {
        let raw: RawAlgorithmIdentifier =
            picky_asn1_der::from_bytes(der.as_ref()).map_err(|e| AlgorithmError::Asn1Deserialization {
                element: "algorithm identifier",
                source: e,
            })?;
        self.resolve(raw)
    }

    /// Resolve an already-decoded structural identifier.
    pub fn resolve(&self, raw: RawAlgorithmIdentifier) -> Result<AlgorithmIdentifier, AlgorithmError> {
        let oid: String = raw.oid().into();

        for provider in &self.providers {
            if provider.supports_oid(&oid) {
                return provider.resolve(raw);
            }
        }

        // built-in table: run the typed decode over the structural form
        let der = picky_asn1_der::to_vec(&raw).map_err(|e| AlgorithmError::Asn1Serialization {
            element: "algorithm identifier",
            source: e,
        })?;
        picky_asn1_der::from_bytes(&der).map_err(|e| AlgorithmError::Asn1Deserialization {
            element: "algorithm identifier",
            source: e,
        })
    }
}
