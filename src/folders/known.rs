//! The closed set of well-known folders and the roots they hang off.

/// Environment-derived base directories.
///
/// Each root is bound to exactly one environment variable, named by
/// [`variable`](RootKind::variable).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum RootKind {
    UserProfile,
    /// The roaming application-data root.
    ApplicationData,
    LocalApplicationData,
    ProgramData,
    Public,
    CommonProgramFiles,
    CommonProgramFilesX86,
    ProgramFiles,
    ProgramFilesX86,
    /// The system root, `SystemRoot` a.k.a. the Windows directory.
    Windows,
}

impl RootKind {
    /// Name of the environment variable holding this root, exact casing as
    /// conventionally written in the Windows environment block.
    pub const fn variable(self) -> &'static str {
        match self {
            Self::UserProfile => "UserProfile",
            Self::ApplicationData => "AppData",
            Self::LocalApplicationData => "LocalAppData",
            Self::ProgramData => "ProgramData",
            Self::Public => "Public",
            Self::CommonProgramFiles => "CommonProgramFiles",
            Self::CommonProgramFilesX86 => "CommonProgramFiles(x86)",
            Self::ProgramFiles => "ProgramFiles",
            Self::ProgramFilesX86 => "ProgramFiles(x86)",
            Self::Windows => "SystemRoot",
        }
    }

    /// Every root, in declaration order.
    pub const ALL: [RootKind; 10] = [
        Self::UserProfile,
        Self::ApplicationData,
        Self::LocalApplicationData,
        Self::ProgramData,
        Self::Public,
        Self::CommonProgramFiles,
        Self::CommonProgramFilesX86,
        Self::ProgramFiles,
        Self::ProgramFilesX86,
        Self::Windows,
    ];
}

/// Symbolic identifiers for well-known folders.
///
/// The set is closed: these are the only members, and every one of them
/// resolves via [`rule`](SpecialFolder::rule) to either an environment root
/// (possibly extended by a fixed relative suffix) or to nothing at all.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum SpecialFolder {
    // User profile.
    UserProfile,
    Desktop,
    DesktopDirectory,
    MyDocuments,
    Favorites,
    MyMusic,
    MyPictures,
    MyVideos,

    // Local profile.
    LocalApplicationData,
    InternetCache,
    Cookies,
    History,
    CDBurning,

    // Roaming profile.
    ApplicationData,
    StartMenu,
    Programs,
    Startup,
    AdminTools,
    Templates,
    SendTo,
    Recent,
    PrinterShortcuts,
    NetworkShortcuts,

    // Machine-wide application data.
    CommonApplicationData,
    CommonStartMenu,
    CommonPrograms,
    CommonStartup,
    CommonAdminTools,
    CommonTemplates,

    // Shared user content under the public profile.
    CommonDesktopDirectory,
    CommonDocuments,
    CommonMusic,
    CommonPictures,
    CommonVideos,

    // The Windows directory and its fixed children.
    Windows,
    Resources,
    System,
    SystemX86,
    Fonts,

    ProgramFiles,
    ProgramFilesX86,
    CommonProgramFiles,
    CommonProgramFilesX86,

    // Never backed by a path.
    MyComputer,
    LocalizedResources,
    CommonOemLinks,
}

/// How a [`SpecialFolder`] maps onto an environment root.
///
/// `root` of `None` marks a folder that never resolves to a path. The suffix
/// is a `/`-separated relative path, re-joined with the host separator at
/// resolution time; empty means the folder is the root itself.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Rule {
    pub root: Option<RootKind>,
    pub suffix: &'static str,
}

const fn direct(root: RootKind) -> Rule {
    Rule {
        root: Some(root),
        suffix: "",
    }
}

const fn under(root: RootKind, suffix: &'static str) -> Rule {
    Rule {
        root: Some(root),
        suffix,
    }
}

const UNSUPPORTED: Rule = Rule {
    root: None,
    suffix: "",
};

impl SpecialFolder {
    /// The resolution rule for this folder.
    ///
    /// Total over the enum; the match is exhaustive, so adding a member
    /// without deciding its rule does not compile.
    pub const fn rule(self) -> Rule {
        use RootKind::*;
        match self {
            Self::UserProfile => direct(UserProfile),
            Self::Desktop | Self::DesktopDirectory => under(UserProfile, "Desktop"),
            Self::MyDocuments => under(UserProfile, "Documents"),
            Self::Favorites => under(UserProfile, "Favorites"),
            Self::MyMusic => under(UserProfile, "Music"),
            Self::MyPictures => under(UserProfile, "Pictures"),
            Self::MyVideos => under(UserProfile, "Videos"),

            Self::LocalApplicationData => direct(LocalApplicationData),
            Self::InternetCache => under(LocalApplicationData, "Microsoft/Windows/INetCache"),
            Self::Cookies => under(LocalApplicationData, "Microsoft/Windows/INetCookies"),
            Self::History => under(LocalApplicationData, "Microsoft/Windows/History"),
            Self::CDBurning => under(LocalApplicationData, "Microsoft/Windows/Burn/Burn"),

            Self::ApplicationData => direct(ApplicationData),
            Self::StartMenu => under(ApplicationData, "Microsoft/Windows/Start Menu"),
            Self::Programs => under(ApplicationData, "Microsoft/Windows/Start Menu/Programs"),
            Self::Startup => {
                under(ApplicationData, "Microsoft/Windows/Start Menu/Programs/Startup")
            }
            Self::AdminTools => under(
                ApplicationData,
                "Microsoft/Windows/Start Menu/Programs/Administrative Tools",
            ),
            Self::Templates => under(ApplicationData, "Microsoft/Windows/Templates"),
            Self::SendTo => under(ApplicationData, "Microsoft/Windows/SendTo"),
            Self::Recent => under(ApplicationData, "Microsoft/Windows/Recent"),
            Self::PrinterShortcuts => {
                under(ApplicationData, "Microsoft/Windows/Printer Shortcuts")
            }
            Self::NetworkShortcuts => {
                under(ApplicationData, "Microsoft/Windows/Network Shortcuts")
            }

            Self::CommonApplicationData => direct(ProgramData),
            Self::CommonStartMenu => under(ProgramData, "Microsoft/Windows/Start Menu"),
            Self::CommonPrograms => under(ProgramData, "Microsoft/Windows/Start Menu/Programs"),
            Self::CommonStartup => {
                under(ProgramData, "Microsoft/Windows/Start Menu/Programs/Startup")
            }
            Self::CommonAdminTools => under(
                ProgramData,
                "Microsoft/Windows/Start Menu/Programs/Administrative Tools",
            ),
            Self::CommonTemplates => under(ProgramData, "Microsoft/Windows/Templates"),

            Self::CommonDesktopDirectory => under(Public, "Desktop"),
            Self::CommonDocuments => under(Public, "Documents"),
            Self::CommonMusic => under(Public, "Music"),
            Self::CommonPictures => under(Public, "Pictures"),
            Self::CommonVideos => under(Public, "Videos"),

            Self::Windows => direct(Windows),
            Self::Resources => under(Windows, "resources"),
            Self::System | Self::SystemX86 => under(Windows, "System32"),
            Self::Fonts => under(Windows, "Fonts"),

            Self::ProgramFiles => direct(ProgramFiles),
            Self::ProgramFilesX86 => direct(ProgramFilesX86),
            Self::CommonProgramFiles => direct(CommonProgramFiles),
            Self::CommonProgramFilesX86 => direct(CommonProgramFilesX86),

            Self::MyComputer | Self::LocalizedResources | Self::CommonOemLinks => UNSUPPORTED,
        }
    }

    /// Every folder, in declaration order.
    pub const ALL: [SpecialFolder; 46] = [
        Self::UserProfile,
        Self::Desktop,
        Self::DesktopDirectory,
        Self::MyDocuments,
        Self::Favorites,
        Self::MyMusic,
        Self::MyPictures,
        Self::MyVideos,
        Self::LocalApplicationData,
        Self::InternetCache,
        Self::Cookies,
        Self::History,
        Self::CDBurning,
        Self::ApplicationData,
        Self::StartMenu,
        Self::Programs,
        Self::Startup,
        Self::AdminTools,
        Self::Templates,
        Self::SendTo,
        Self::Recent,
        Self::PrinterShortcuts,
        Self::NetworkShortcuts,
        Self::CommonApplicationData,
        Self::CommonStartMenu,
        Self::CommonPrograms,
        Self::CommonStartup,
        Self::CommonAdminTools,
        Self::CommonTemplates,
        Self::CommonDesktopDirectory,
        Self::CommonDocuments,
        Self::CommonMusic,
        Self::CommonPictures,
        Self::CommonVideos,
        Self::Windows,
        Self::Resources,
        Self::System,
        Self::SystemX86,
        Self::Fonts,
        Self::ProgramFiles,
        Self::ProgramFilesX86,
        Self::CommonProgramFiles,
        Self::CommonProgramFilesX86,
        Self::MyComputer,
        Self::LocalizedResources,
        Self::CommonOemLinks,
    ];
}
