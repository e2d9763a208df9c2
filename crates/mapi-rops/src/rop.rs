//! ROP operation identifiers
//!
//! The flat table of remote operation identifiers. Each ROP travels as a
//! single byte at the head of its request and response buffers.

use crate::error::{raise, Result, RopError};
use crate::{RopDecode, RopEncode, RopPull, RopPush};

macro_rules! rop_id_table {
    ($($name:ident = $value:literal,)+) => {
        /// Remote operation identifier
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum RopId {
            $($name = $value,)+
        }

        impl RopId {
            /// Look up a wire byte in the identifier table.
            pub fn from_u8(value: u8) -> Option<Self> {
                match value {
                    $($value => Some(Self::$name),)+
                    _ => None,
                }
            }
        }
    };
}

rop_id_table! {
    Release = 0x01,
    OpenFolder = 0x02,
    OpenMessage = 0x03,
    GetHierarchyTable = 0x04,
    GetContentsTable = 0x05,
    CreateMessage = 0x06,
    GetPropertiesSpecific = 0x07,
    GetPropertiesAll = 0x08,
    GetPropertiesList = 0x09,
    SetProperties = 0x0A,
    DeleteProperties = 0x0B,
    SaveChangesMessage = 0x0C,
    RemoveAllRecipients = 0x0D,
    ModifyRecipients = 0x0E,
    ReadRecipients = 0x0F,
    ReloadCachedInformation = 0x10,
    SetMessageReadFlag = 0x11,
    SetColumns = 0x12,
    SortTable = 0x13,
    Restrict = 0x14,
    QueryRows = 0x15,
    GetStatus = 0x16,
    QueryPosition = 0x17,
    SeekRow = 0x18,
    SeekRowBookmark = 0x19,
    SeekRowFractional = 0x1A,
    CreateBookmark = 0x1B,
    CreateFolder = 0x1C,
    DeleteFolder = 0x1D,
    DeleteMessages = 0x1E,
    GetMessageStatus = 0x1F,
    SetMessageStatus = 0x20,
    GetAttachmentTable = 0x21,
    OpenAttachment = 0x22,
    CreateAttachment = 0x23,
    DeleteAttachment = 0x24,
    SaveChangesAttachment = 0x25,
    SetReceiveFolder = 0x26,
    GetReceiveFolder = 0x27,
    RegisterNotification = 0x29,
    Notify = 0x2A,
    OpenStream = 0x2B,
    ReadStream = 0x2C,
    WriteStream = 0x2D,
    SeekStream = 0x2E,
    SetStreamSize = 0x2F,
    SetSearchCriteria = 0x30,
    GetSearchCriteria = 0x31,
    SubmitMessage = 0x32,
    MoveCopyMessages = 0x33,
    AbortSubmit = 0x34,
    MoveFolder = 0x35,
    CopyFolder = 0x36,
    QueryColumnsAll = 0x37,
    Abort = 0x38,
    CopyTo = 0x39,
    CopyToStream = 0x3A,
    CloneStream = 0x3B,
    GetPermissionsTable = 0x3E,
    GetRulesTable = 0x3F,
    ModifyPermissions = 0x40,
    ModifyRules = 0x41,
    GetOwningServers = 0x42,
    LongTermIdFromId = 0x43,
    IdFromLongTermId = 0x44,
    PublicFolderIsGhosted = 0x45,
    OpenEmbeddedMessage = 0x46,
    SetSpooler = 0x47,
    SpoolerLockMessage = 0x48,
    GetAddressTypes = 0x49,
    TransportSend = 0x4A,
    FastTransferSourceCopyMessages = 0x4B,
    FastTransferSourceCopyFolder = 0x4C,
    FastTransferSourceCopyTo = 0x4D,
    FastTransferSourceGetBuffer = 0x4E,
    FindRow = 0x4F,
    Progress = 0x50,
    TransportNewMail = 0x51,
    GetValidAttachments = 0x52,
    FastTransferDestinationConfigure = 0x53,
    FastTransferDestinationPutBuffer = 0x54,
    GetNamesFromPropertyIds = 0x55,
    GetPropertyIdsFromNames = 0x56,
    UpdateDeferredActionMessages = 0x57,
    EmptyFolder = 0x58,
    ExpandRow = 0x59,
    CollapseRow = 0x5A,
    LockRegionStream = 0x5B,
    UnlockRegionStream = 0x5C,
    CommitStream = 0x5D,
    GetStreamSize = 0x5E,
    QueryNamedProperties = 0x5F,
    GetPerUserLongTermIds = 0x60,
    GetPerUserGuid = 0x61,
    ReadPerUserInformation = 0x63,
    WritePerUserInformation = 0x64,
    SetReadFlags = 0x66,
    CopyProperties = 0x67,
    GetReceiveFolderTable = 0x68,
    FastTransferSourceCopyProperties = 0x69,
    GetCollapseState = 0x6B,
    SetCollapseState = 0x6C,
    GetTransportFolder = 0x6D,
    Pending = 0x6E,
    OptionsData = 0x6F,
    SynchronizationConfigure = 0x70,
    SynchronizationImportMessageChange = 0x72,
    SynchronizationImportHierarchyChange = 0x73,
    SynchronizationImportDeletes = 0x74,
    SynchronizationUploadStateStreamBegin = 0x75,
    SynchronizationUploadStateStreamContinue = 0x76,
    SynchronizationUploadStateStreamEnd = 0x77,
    SynchronizationImportMessageMove = 0x78,
    SetPropertiesNoReplicate = 0x79,
    DeletePropertiesNoReplicate = 0x7A,
    GetStoreState = 0x7B,
    SynchronizationOpenCollector = 0x7E,
    GetLocalReplicaIds = 0x7F,
    SynchronizationImportReadStateChanges = 0x80,
    ResetTable = 0x81,
    SynchronizationGetTransferState = 0x82,
    TellVersion = 0x86,
    FreeBookmark = 0x89,
    WriteAndCommitStream = 0x90,
    HardDeleteMessages = 0x91,
    HardDeleteMessagesAndSubFolders = 0x92,
    SetLocalReplicaMidsetDeleted = 0x93,
    Backoff = 0xF9,
    Logon = 0xFE,
    BufferTooSmall = 0xFF,
}

impl From<RopId> for u8 {
    fn from(rop: RopId) -> Self {
        rop as u8
    }
}

impl RopEncode for RopId {
    fn rop_encode(&self, push: &mut RopPush) -> Result<()> {
        push.push_u8(*self as u8)
    }
}

impl RopDecode for RopId {
    fn rop_decode(pull: &mut RopPull) -> Result<Self> {
        let raw = pull.pull_u8()?;
        Self::from_u8(raw).ok_or_else(|| {
            raise(
                RopError::InvalidValue(format!("unknown rop identifier {raw:#04x}")),
                "pull_rop_id",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_rop_id_wire_roundtrip() {
        let mut push = RopPush::new();
        RopId::Logon.rop_encode(&mut push).unwrap();
        assert_eq!(push.as_bytes(), &[0xFE]);

        let mut pull = RopPull::new(push.into_bytes());
        assert_eq!(RopId::rop_decode(&mut pull).unwrap(), RopId::Logon);
        assert_eq!(pull.offset(), 1);
    }

    #[test]
    fn test_reserved_byte_is_invalid_value() {
        // 0x28 is a reserved identifier with no table entry
        let mut pull = RopPull::new(Bytes::from_static(&[0x28]));
        let err = RopId::rop_decode(&mut pull).unwrap_err();
        assert!(matches!(err, RopError::InvalidValue(_)));
    }

    #[test]
    fn test_table_lookup() {
        assert_eq!(RopId::from_u8(0x01), Some(RopId::Release));
        assert_eq!(RopId::from_u8(0xFF), Some(RopId::BufferTooSmall));
        assert_eq!(RopId::from_u8(0xF9), Some(RopId::Backoff));
        assert_eq!(RopId::from_u8(0x94), None);
    }
}
