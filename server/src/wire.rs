//! Wire codec (C1): translates between in-memory `AgentToServer` /
//! `ServerToAgent` and the on-wire OpAMP representation.
//!
//! Grounded in the capability bit-field newtype from the OpAMP client's
//! `operation::capabilities` module, generalized here to a `u64` field (the
//! client only ever needs to set bits; the server also needs to decode an
//! arbitrary peer's bit-field and report bits it doesn't recognize).

use opamp_proto::proto::{AgentCapabilities, AgentToServer, ServerToAgent};
use prost::Message;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("truncated frame")]
    Truncated,
    #[error("invalid field tag: {0}")]
    InvalidFieldTag(String),
    #[error("payload of {size} bytes exceeds ceiling of {ceiling} bytes")]
    Oversized { size: usize, ceiling: usize },
}

pub type WireResult<T> = std::result::Result<T, WireError>;

/// Strips leading `0x00` bytes (a protobuf message never legitimately starts
/// with one, since field tag 0 is invalid) and enforces the size ceiling,
/// then decodes an `AgentToServer` frame.
///
/// §4.1 / P7: a frame prefixed with one or more `0x00` bytes decodes
/// identically to the same frame without the prefix.
pub fn decode_agent_to_server(
    raw: &[u8],
    size_ceiling: usize,
    max_leading_nulls: usize,
) -> WireResult<AgentToServer> {
    if raw.len() > size_ceiling {
        return Err(WireError::Oversized {
            size: raw.len(),
            ceiling: size_ceiling,
        });
    }
    let payload = strip_leading_nulls(raw, max_leading_nulls);
    if payload.is_empty() {
        return Err(WireError::Truncated);
    }
    AgentToServer::decode(payload).map_err(|e| map_decode_error(e))
}

/// Encodes a `ServerToAgent` for the wire. No application-level length
/// prefix is added: WebSocket framing and HTTP content-length carry that.
pub fn encode_server_to_agent(msg: &ServerToAgent) -> Vec<u8> {
    msg.encode_to_vec()
}

/// As [`encode_server_to_agent`], but refuses to produce a frame larger than
/// `size_ceiling`. `protocol::compose_response` already drops an oversized
/// remote-config offer before it reaches here; this is the last line of
/// defense against any other outbound field growing past the ceiling (§4.1
/// applies symmetrically to both directions).
pub fn encode_server_to_agent_checked(msg: &ServerToAgent, size_ceiling: usize) -> WireResult<Vec<u8>> {
    let encoded = msg.encode_to_vec();
    if encoded.len() > size_ceiling {
        return Err(WireError::Oversized {
            size: encoded.len(),
            ceiling: size_ceiling,
        });
    }
    Ok(encoded)
}

fn strip_leading_nulls(raw: &[u8], max_leading_nulls: usize) -> &[u8] {
    let leading = raw.iter().take_while(|b| **b == 0).count();
    if leading == 0 || leading > max_leading_nulls {
        // Beyond tolerance: hand the untouched bytes to the decoder, which
        // will fail with a clear tag error (field tag 0 is invalid) rather
        // than silently eating an arbitrarily long run of nulls.
        return raw;
    }
    &raw[leading..]
}

fn map_decode_error(e: prost::DecodeError) -> WireError {
    let msg = e.to_string();
    if msg.contains("buffer underflow") || msg.contains("unexpected end") {
        WireError::Truncated
    } else {
        WireError::InvalidFieldTag(msg)
    }
}

/// All capability bits recognized by this server, per §4.5. Order matches
/// the protobuf enum; bits not listed here are still preserved numerically
/// and reported back as "unknown bit N" by [`DecodedCapabilities::unknown_bits`].
const KNOWN_AGENT_CAPABILITIES: &[AgentCapabilities] = &[
    AgentCapabilities::ReportsStatus,
    AgentCapabilities::AcceptsRemoteConfig,
    AgentCapabilities::ReportsEffectiveConfig,
    AgentCapabilities::AcceptsPackages,
    AgentCapabilities::ReportsPackageStatuses,
    AgentCapabilities::ReportsOwnTraces,
    AgentCapabilities::ReportsOwnMetrics,
    AgentCapabilities::ReportsOwnLogs,
    AgentCapabilities::AcceptsOpAmpConnectionSettings,
    AgentCapabilities::AcceptsOtherConnectionSettings,
    AgentCapabilities::AcceptsRestartCommand,
    AgentCapabilities::ReportsHealth,
    AgentCapabilities::ReportsRemoteConfig,
    AgentCapabilities::ReportsHeartbeat,
    AgentCapabilities::ReportsAvailableComponents,
];

/// A decoded `capabilities` bit-field: which recognized bits are set, plus
/// any bit positions the server doesn't have a name for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedCapabilities {
    raw: u64,
}

impl DecodedCapabilities {
    pub fn from_bits(raw: u64) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> u64 {
        self.raw
    }

    pub fn has(&self, capability: AgentCapabilities) -> bool {
        self.raw & (capability as u64) != 0
    }

    /// Named, recognized capabilities present in the bit-field.
    pub fn recognized(&self) -> Vec<AgentCapabilities> {
        KNOWN_AGENT_CAPABILITIES
            .iter()
            .copied()
            .filter(|c| self.has(*c))
            .collect()
    }

    /// Bit positions set in the field that don't correspond to any bit this
    /// server recognizes, surfaced as `"unknown bit N"`.
    pub fn unknown_bits(&self) -> Vec<String> {
        let known_mask: u64 = KNOWN_AGENT_CAPABILITIES
            .iter()
            .fold(0u64, |acc, c| acc | (*c as u64));
        let mut out = Vec::new();
        for bit in 0..64 {
            let mask = 1u64 << bit;
            if self.raw & mask != 0 && known_mask & mask == 0 {
                out.push(format!("unknown bit {bit}"));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_prefix_tolerance_decodes_identically() {
        let msg = AgentToServer {
            instance_uid: vec![1; 16],
            sequence_num: 1,
            capabilities: 0x3,
            ..Default::default()
        };
        let plain = msg.encode_to_vec();
        let mut prefixed = vec![0u8, 0u8];
        prefixed.extend_from_slice(&plain);

        let decoded_plain = decode_agent_to_server(&plain, 4 * 1024 * 1024, 16).unwrap();
        let decoded_prefixed = decode_agent_to_server(&prefixed, 4 * 1024 * 1024, 16).unwrap();
        assert_eq!(decoded_plain, decoded_prefixed);
    }

    #[test]
    fn oversized_payload_rejected() {
        let big = vec![1u8; 32];
        let err = decode_agent_to_server(&big, 16, 16).unwrap_err();
        assert!(matches!(err, WireError::Oversized { .. }));
    }

    #[test]
    fn unknown_bits_are_surfaced_by_position() {
        let caps = DecodedCapabilities::from_bits(0x3 | (1 << 20));
        assert_eq!(caps.unknown_bits(), vec!["unknown bit 20".to_string()]);
        assert!(caps.has(AgentCapabilities::ReportsStatus));
        assert!(caps.has(AgentCapabilities::AcceptsRemoteConfig));
    }

    #[test]
    fn empty_after_stripping_is_truncated() {
        let err = decode_agent_to_server(&[0u8, 0u8], 16, 16).unwrap_err();
        assert!(matches!(err, WireError::Truncated));
    }
}
