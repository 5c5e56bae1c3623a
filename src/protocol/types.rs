//! Standard attribute type codes.
//!
//! The assigned codes from RFC 2865 §5, used to seed the standard registry.
//! Unassigned and vendor space codes simply have no entry here; the dispatcher
//! treats them as unknown and passes them through opaquely.

use crate::protocol::registry::ValueKind;
use serde::{Deserialize, Serialize};

/// Well-known RADIUS attribute type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AttributeType {
    UserName = 1,
    UserPassword = 2,
    ChapPassword = 3,
    NasIpAddress = 4,
    NasPort = 5,
    ServiceType = 6,
    FramedProtocol = 7,
    FramedIpAddress = 8,
    FramedIpNetmask = 9,
    FramedRouting = 10,
    FilterId = 11,
    FramedMtu = 12,
    FramedCompression = 13,
    LoginIpHost = 14,
    LoginService = 15,
    LoginTcpPort = 16,
    ReplyMessage = 18,
    CallbackNumber = 19,
    CallbackId = 20,
    FramedRoute = 22,
    FramedIpxNetwork = 23,
    State = 24,
    Class = 25,
    VendorSpecific = 26,
    SessionTimeout = 27,
    IdleTimeout = 28,
    TerminationAction = 29,
    CalledStationId = 30,
    CallingStationId = 31,
    NasIdentifier = 32,
    ProxyState = 33,
    LoginLatService = 34,
    LoginLatNode = 35,
    LoginLatGroup = 36,
    FramedAppleTalkLink = 37,
    FramedAppleTalkNetwork = 38,
    FramedAppleTalkZone = 39,
    AcctStatusType = 40,
    AcctDelayTime = 41,
    AcctInputOctets = 42,
    AcctOutputOctets = 43,
    AcctSessionId = 44,
    AcctAuthentic = 45,
    AcctSessionTime = 46,
    AcctInputPackets = 47,
    AcctOutputPackets = 48,
    AcctTerminateCause = 49,
    AcctMultiSessionId = 50,
    AcctLinkCount = 51,
    ChapChallenge = 60,
    NasPortType = 61,
    PortLimit = 62,
    LoginLatPort = 63,
}

impl AttributeType {
    /// Every assigned code, in tag order. Drives registry seeding.
    pub const ALL: &'static [AttributeType] = &[
        Self::UserName,
        Self::UserPassword,
        Self::ChapPassword,
        Self::NasIpAddress,
        Self::NasPort,
        Self::ServiceType,
        Self::FramedProtocol,
        Self::FramedIpAddress,
        Self::FramedIpNetmask,
        Self::FramedRouting,
        Self::FilterId,
        Self::FramedMtu,
        Self::FramedCompression,
        Self::LoginIpHost,
        Self::LoginService,
        Self::LoginTcpPort,
        Self::ReplyMessage,
        Self::CallbackNumber,
        Self::CallbackId,
        Self::FramedRoute,
        Self::FramedIpxNetwork,
        Self::State,
        Self::Class,
        Self::VendorSpecific,
        Self::SessionTimeout,
        Self::IdleTimeout,
        Self::TerminationAction,
        Self::CalledStationId,
        Self::CallingStationId,
        Self::NasIdentifier,
        Self::ProxyState,
        Self::LoginLatService,
        Self::LoginLatNode,
        Self::LoginLatGroup,
        Self::FramedAppleTalkLink,
        Self::FramedAppleTalkNetwork,
        Self::FramedAppleTalkZone,
        Self::AcctStatusType,
        Self::AcctDelayTime,
        Self::AcctInputOctets,
        Self::AcctOutputOctets,
        Self::AcctSessionId,
        Self::AcctAuthentic,
        Self::AcctSessionTime,
        Self::AcctInputPackets,
        Self::AcctOutputPackets,
        Self::AcctTerminateCause,
        Self::AcctMultiSessionId,
        Self::AcctLinkCount,
        Self::ChapChallenge,
        Self::NasPortType,
        Self::PortLimit,
        Self::LoginLatPort,
    ];

    /// Looks up an assigned code; unassigned values return `None`.
    pub fn from_u8(tag: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| *t as u8 == tag)
    }

    /// How this attribute's value is represented on the wire.
    pub fn value_kind(self) -> ValueKind {
        use AttributeType::*;
        match self {
            UserName | FilterId | ReplyMessage | CallbackNumber | CallbackId | FramedRoute
            | CalledStationId | CallingStationId | NasIdentifier | LoginLatService
            | LoginLatNode | FramedAppleTalkZone | AcctSessionId | AcctMultiSessionId
            | LoginLatPort => ValueKind::Text,

            NasPort | ServiceType | FramedProtocol | FramedRouting | FramedMtu
            | FramedCompression | LoginService | LoginTcpPort | FramedIpxNetwork
            | SessionTimeout | IdleTimeout | TerminationAction | FramedAppleTalkLink
            | FramedAppleTalkNetwork | AcctStatusType | AcctDelayTime | AcctInputOctets
            | AcctOutputOctets | AcctAuthentic | AcctSessionTime | AcctInputPackets
            | AcctOutputPackets | AcctTerminateCause | AcctLinkCount | NasPortType
            | PortLimit => ValueKind::Integer,

            NasIpAddress | FramedIpAddress | FramedIpNetmask | LoginIpHost => ValueKind::Ipv4,

            // Opaque or structured payloads the codec does not interpret
            // (encrypted passwords, CHAP data, vendor blobs, proxy state).
            UserPassword | ChapPassword | State | Class | VendorSpecific | ProxyState
            | LoginLatGroup | ChapChallenge => ValueKind::Binary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8_assigned() {
        assert_eq!(AttributeType::from_u8(1), Some(AttributeType::UserName));
        assert_eq!(
            AttributeType::from_u8(32),
            Some(AttributeType::NasIdentifier)
        );
        assert_eq!(AttributeType::from_u8(61), Some(AttributeType::NasPortType));
    }

    #[test]
    fn test_from_u8_unassigned() {
        assert_eq!(AttributeType::from_u8(0), None);
        assert_eq!(AttributeType::from_u8(17), None);
        assert_eq!(AttributeType::from_u8(21), None);
        assert_eq!(AttributeType::from_u8(200), None);
    }

    #[test]
    fn test_all_codes_roundtrip() {
        for ty in AttributeType::ALL {
            assert_eq!(AttributeType::from_u8(*ty as u8), Some(*ty));
        }
    }

    #[test]
    fn test_value_kind_samples() {
        assert_eq!(AttributeType::NasIdentifier.value_kind(), ValueKind::Text);
        assert_eq!(AttributeType::NasPort.value_kind(), ValueKind::Integer);
        assert_eq!(AttributeType::NasIpAddress.value_kind(), ValueKind::Ipv4);
        assert_eq!(AttributeType::State.value_kind(), ValueKind::Binary);
    }
}
