//! Protocol status codes
//!
//! The flat table of MAPI status codes per [MS-OXCDATA]. On the wire a
//! status is a plain little-endian u32; this layer only checks membership
//! in the table, it never interprets what a code means.

use crate::error::{raise, Result, RopError};
use crate::{RopDecode, RopEncode, RopPull, RopPush};

macro_rules! mapi_status_table {
    ($($name:ident = $value:literal,)+) => {
        /// MAPI status code
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum MapiStatus {
            $($name = $value,)+
        }

        impl MapiStatus {
            /// Look up a wire value in the closed status table.
            pub fn from_u32(value: u32) -> Option<Self> {
                match value {
                    $($value => Some(Self::$name),)+
                    _ => None,
                }
            }
        }
    };
}

mapi_status_table! {
    Success = 0x00000000,
    GeneralFailure = 0x80004005,
    OutOfMemory = 0x8007000e,
    InvalidParameter = 0x80070057,
    NoInterface = 0x80004002,
    AccessDenied = 0x80070005,
    StorageInvalidFunction = 0x80030001,
    StorageAccessDenied = 0x80030005,
    StorageInsufficientMemory = 0x80030008,
    StorageInvalidPointer = 0x80030009,
    StorageReadFault = 0x8003001e,
    StorageLockViolation = 0x80030021,
    StorageInvalidParameter = 0x80030057,
    StorageInvalidFlag = 0x800300ff,
    StorageCantSave = 0x80030103,
    NotSupported = 0x80040102,
    InvalidCharacterWidth = 0x80040103,
    StringTooLong = 0x80040105,
    InvalidFlag = 0x80040106,
    InvalidEntryId = 0x80040107,
    InvalidObject = 0x80040108,
    ObjectChanged = 0x80040109,
    ObjectDeleted = 0x8004010a,
    Busy = 0x8004010b,
    OutOfDisk = 0x8004010d,
    OutOfResources = 0x8004010e,
    NotFound = 0x8004010f,
    VersionMismatch = 0x80040110,
    LogonFailed = 0x80040111,
    TooManySessions = 0x80040112,
    UserCanceled = 0x80040113,
    AbortFailed = 0x80040114,
    NetworkError = 0x80040115,
    DiskError = 0x80040116,
    TooComplex = 0x80040117,
    InvalidColumn = 0x80040118,
    ComputedValue = 0x8004011a,
    CorruptData = 0x8004011b,
    InvalidCodepage = 0x8004011e,
    InvalidLocale = 0x8004011f,
    TimeSkew = 0x80040123,
    EndOfSession = 0x80040200,
    UnknownEntryId = 0x80040201,
    NotCompleted = 0x80040400,
    Timeout = 0x80040401,
    EmptyTable = 0x80040402,
    TableTooBig = 0x80040403,
    InvalidBookmark = 0x80040405,
    ErrorWait = 0x80040500,
    ErrorCancel = 0x80040501,
    NoSuppress = 0x80040602,
    CollidingNames = 0x80040604,
    NotInitialized = 0x80040605,
    NoRecipients = 0x80040607,
    AlreadySent = 0x80040608,
    HasFolders = 0x80040609,
    HasMessages = 0x8004060a,
    FolderCycle = 0x8004060b,
    TooManyLocks = 0x8004060d,
    AmbiguousRecipient = 0x80040700,
    SyncObjectDeleted = 0x80040800,
    IgnoreFailure = 0x80040801,
    SyncConflict = 0x80040802,
    NoParentFolder = 0x80040803,
    CycleDeleted = 0x80040804,
    NotSynchronized = 0x80040805,
    NamedPropertyQuota = 0x80040900,
    NotImplemented = 0x80040fff,
    ProfileNotConfigured = 0x0000011c,
    IsamError = 0x000003e4,
    UnknownUser = 0x000003eb,
    Exiting = 0x000003ed,
    BadConfig = 0x000003ee,
    UnknownCodePage = 0x000003ef,
    ServerMemory = 0x000003f0,
    LoginPermission = 0x000003f2,
    DatabaseRolledBack = 0x000003f3,
    DatabaseCopiedError = 0x000003f4,
    AuditNotAllowed = 0x000003f5,
    ZombieUser = 0x000003f6,
    UnconvertableAcl = 0x000003f7,
    NoFreeJetSessions = 0x0000044c,
    DifferentJetSession = 0x0000044d,
    FileRemove = 0x0000044f,
    ParameterOverflow = 0x00000450,
    BadVersion = 0x00000451,
    TooManyColumns = 0x00000452,
    HaveMore = 0x00000453,
    DatabaseError = 0x00000454,
    IndexNameTooBig = 0x00000455,
    UnsupportedProperty = 0x00000456,
    MessageNotSaved = 0x00000457,
    UnpublishedNotification = 0x00000459,
    DifferentRoot = 0x0000045b,
    BadFolderName = 0x0000045c,
    AttachmentOpen = 0x0000045d,
    InvalidCollapseState = 0x0000045e,
    SkipMyChildren = 0x0000045f,
    SearchFolder = 0x00000460,
    NotSearchFolder = 0x00000461,
    FolderSetReceive = 0x00000462,
    DeletedSubmitMessage = 0x00000465,
    InvalidRecipients = 0x00000467,
    NoReplicaHere = 0x00000468,
    NoReplicaAvailable = 0x00000469,
    PublicDatabase = 0x0000046a,
    NotPublicDatabase = 0x0000046b,
    RecordNotFound = 0x0000046c,
    ReplicationConflict = 0x0000046d,
    FxBufferOverrun = 0x00000470,
    FxBufferEmpty = 0x00000471,
    FxPartialValue = 0x00000472,
    FxNoRoom = 0x00000473,
    TimeExpired = 0x00000474,
    DestinationError = 0x00000475,
    DatabaseNotInitialized = 0x00000476,
    WrongServer = 0x00000478,
    BufferTooSmall = 0x0000047d,
    AttachmentResolutionRequired = 0x0000047e,
    ServerPaused = 0x0000047f,
    ServerBusy = 0x00000480,
    NoSuchLogon = 0x00000481,
    LoadLibraryFailed = 0x00000482,
    AlreadyConfigured = 0x00000483,
    NotConfigured = 0x00000484,
    DataLoss = 0x00000485,
    MaximumSendThreadExceeded = 0x00000488,
    FxErrorMarker = 0x00000489,
    NoFreeJtabs = 0x0000048a,
    NotPrivateDatabase = 0x0000048b,
    IsIntegMdb = 0x0000048c,
    RecoveryMismatch = 0x0000048d,
    TableMayNotBeDeleted = 0x0000048e,
    SearchFolderScopeViolation = 0x00000490,
    RpcRegisterIf = 0x000004b1,
    RpcListen = 0x000004b2,
    RpcFormat = 0x000004b6,
    NoCopyTo = 0x000004b7,
    NullObject = 0x000004b9,
    RpcAuthentication = 0x000004bc,
    RpcBadAuthenticationLevel = 0x000004bd,
    NullCommentRestriction = 0x000004be,
    RulesLoadError = 0x000004cc,
    RulesDeliverErr = 0x000004cd,
    RulesParsingErr = 0x000004ce,
    RulesCreateDae = 0x000004cf,
    RulesCreateDam = 0x000004d0,
    RulesNoMoveCopyFolder = 0x000004d1,
    RuleNoFolderRights = 0x000004d2,
    MessageTooBig = 0x000004d4,
    FormNotValid = 0x000004d5,
    NotAuthorized = 0x000004d6,
    DeleteMessage = 0x000004d7,
    BounceMessage = 0x000004d8,
    QuotaExceeded = 0x000004d9,
    MaxSubmissionExceeded = 0x000004da,
    MaxAttachmentExceeded = 0x000004db,
    SendAsDenied = 0x000004dc,
    ShutoffQuotaExceeded = 0x000004dd,
    TooManyOpenObjects = 0x000004de,
    ClientVersionBlocked = 0x000004df,
    RpcHttpDisallowed = 0x000004e0,
    CachedModeRequired = 0x000004e1,
    FolderCleanedUp = 0x000004e3,
    FormatError = 0x000004ed,
    NotExpanded = 0x000004f7,
    NotCollapsed = 0x000004f8,
    NoExpandedLeafRow = 0x000004f9,
    UnregisteredNamedProp = 0x000004fa,
    FolderDisabled = 0x000004fb,
    DomainError = 0x000004fc,
    NoCreateRight = 0x000004ff,
    PublicRoot = 0x00000500,
    NoReadRight = 0x00000501,
    NoCreateSubfolderRight = 0x00000502,
    NullDestinationObject = 0x00000503,
    MessageCycle = 0x00000504,
    TooManyRecips = 0x00000505,
    VirusScanInProgress = 0x0000050a,
    VirusDetected = 0x0000050b,
    MailboxInTransit = 0x0000050c,
    BackupInProgress = 0x0000050d,
    VirusMessageDeleted = 0x0000050e,
    InvalidBackupSequence = 0x0000050f,
    InvalidBackupType = 0x00000510,
    TooManyBackups = 0x00000511,
    RestoreInProgress = 0x00000512,
    DuplicateObject = 0x00000579,
    ObjectNotFound = 0x0000057a,
    FixupReplyRule = 0x0000057b,
    TemplateNotFound = 0x0000057c,
    RuleExecution = 0x0000057d,
    DsNoSuchObject = 0x0000057e,
    AlreadyTombstoned = 0x0000057f,
    ReadOnlyTransaction = 0x00000596,
    Paused = 0x0000060e,
    NotPaused = 0x0000060f,
    WrongMailbox = 0x00000648,
    ChangePassword = 0x0000064c,
    PasswordExpired = 0x0000064d,
    InvalidWorkstation = 0x0000064e,
    InvalidLogonHours = 0x0000064f,
    AccountDisabled = 0x00000650,
    RuleVersion = 0x000006a4,
    RuleFormat = 0x000006a5,
    RuleSendAsDenied = 0x000006a6,
    NoServerSupport = 0x000006b9,
    LockTimedOut = 0x000006ba,
    ObjectLocked = 0x000006bb,
    InvalidLockNamespace = 0x000006bd,
    MessageDeleted = 0x000007d6,
    ProtocolDisabled = 0x000007d8,
    CleartextLogonDisabled = 0x000007d9,
    Rejected = 0x000007ee,
    AmbiguousAlias = 0x0000089a,
    UnknownMailbox = 0x0000089b,
    ExpressionReserved = 0x000008fc,
    ExpressionParseDepth = 0x000008fd,
    ExpressionArgumentType = 0x000008fe,
    ExpressionSyntax = 0x000008ff,
    ExpressionBadStringToken = 0x00000900,
    ExpressionBadColToken = 0x00000901,
    ExpressionTypeMismatch = 0x00000902,
    ExpressionOperatorNotSupported = 0x00000903,
    ExpressionDivideByZero = 0x00000904,
    ExpressionUnaryArgument = 0x00000905,
    NotLocked = 0x00000960,
    ClientEvent = 0x00000961,
    CorruptEvent = 0x00000965,
    CorruptWatermark = 0x00000966,
    EventError = 0x00000967,
    WatermarkError = 0x00000968,
    NonCanonicalAcl = 0x00000969,
    MailboxDisabled = 0x0000096c,
    RulesFolderOverQuota = 0x0000096d,
    AddressBookUnavailable = 0x0000096e,
    AddressBookError = 0x0000096f,
    AddressBookObjectNotFound = 0x00000971,
    AddressBookPropertyError = 0x00000972,
    NotEncrypted = 0x00000970,
    RpcServerTooBusy = 0x00000973,
    RpcOutOfMemory = 0x00000974,
    RpcServerOutOfMemory = 0x00000975,
    RpcOutOfResources = 0x00000976,
    RpcServerUnavailable = 0x00000977,
    SecureSubmitError = 0x0000097a,
    EventsDeleted = 0x0000097c,
    SubsystemStopping = 0x0000097d,
    AttendantUnavailable = 0x0000097e,
    CiStopping = 0x00000a28,
    FxInvalidState = 0x00000a29,
    FxUnexpectedMarker = 0x00000a2a,
    DuplicateDelivery = 0x00000a2b,
    ConditionViolation = 0x00000a2c,
    MaximumConnectionPoolsExceeded = 0x00000a2d,
    InvalidRpcHandle = 0x00000a2e,
    EventNotFound = 0x00000a2f,
    PropertyNotPromoted = 0x00000a30,
    LowFreeSpaceForDatabase = 0x00000a31,
    LowFreeSpaceForLogs = 0x00000a32,
    MailboxIsQuarantined = 0x00000a33,
    DatabaseMountInProgress = 0x00000a34,
    DatabaseDismountInProgress = 0x00000a35,
    ConnectionsOverBudget = 0x00000a36,
    NotFoundInContainer = 0x00000a37,
    CannotRemove = 0x00000a38,
    InvalidConnectionPool = 0x00000a39,
    VirusScanGeneralFailure = 0x00000a3a,
}

impl From<MapiStatus> for u32 {
    fn from(status: MapiStatus) -> Self {
        status as u32
    }
}

impl RopEncode for MapiStatus {
    fn rop_encode(&self, push: &mut RopPush) -> Result<()> {
        push.push_u32(*self as u32)
    }
}

impl RopDecode for MapiStatus {
    fn rop_decode(pull: &mut RopPull) -> Result<Self> {
        let raw = pull.pull_u32()?;
        Self::from_u32(raw)
            .ok_or_else(|| raise(RopError::InvalidStatus(raw), "pull_mapi_status"))
    }
}
