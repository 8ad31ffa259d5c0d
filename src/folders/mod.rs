//! Well-known folder resolution.
//!
//! Maps a [`SpecialFolder`] onto a concrete path by combining one of the
//! environment-derived roots in [`RootKind`] with a fixed relative suffix.
//!
//! ```rust
//! # use windirs::folders::{self, SpecialFolder};
//! # use windirs::os::env::EnvSnapshot;
//! let env: EnvSnapshot = [("UserProfile", "/home/u")].into_iter().collect();
//!
//! let documents = folders::resolve(&env, SpecialFolder::MyDocuments);
//! ```

use std::path::PathBuf;

use crate::os::env::EnvSnapshot;

pub mod known;

pub use known::{RootKind, SpecialFolder};

/// Resolve `folder` against the roots recorded in `env`.
///
/// # Returns
/// The resolved path, or an empty [`PathBuf`] when `folder` has no value.
/// Empty is not an error; it is the answer for the deliberately unsupported
/// folders and for any folder whose root variable is unset in `env`. A rule
/// with an absent root never degrades to a bare relative suffix.
///
/// A variable holding an empty value counts as unset. Resolution reads only
/// the snapshot: no filesystem I/O, and no check that the result exists.
pub fn resolve(env: &EnvSnapshot, folder: SpecialFolder) -> PathBuf {
    let rule = folder.rule();
    let Some(root) = rule.root else {
        return PathBuf::new();
    };
    let Some(base) = root_value(env, root) else {
        return PathBuf::new();
    };
    if rule.suffix.is_empty() {
        return base;
    }
    let mut path = base;
    for component in rule.suffix.split('/') {
        path.push(component);
    }
    path
}

/// Resolve `folder` against the live process environment.
///
/// Snapshot-capturing convenience for [`resolve`].
pub fn resolve_current(folder: SpecialFolder) -> PathBuf {
    resolve(&EnvSnapshot::capture(), folder)
}

fn root_value(env: &EnvSnapshot, root: RootKind) -> Option<PathBuf> {
    let value = env.get_os(root.variable())?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pairs: &[(&str, &str)]) -> EnvSnapshot {
        pairs.iter().copied().collect()
    }

    fn full_snapshot() -> EnvSnapshot {
        snapshot(&[
            ("UserProfile", "/home/u"),
            ("AppData", "/home/u/roaming"),
            ("LocalAppData", "/home/u/local"),
            ("ProgramData", "/programdata"),
            ("Public", "/public"),
            ("CommonProgramFiles", "/pf/common"),
            ("CommonProgramFiles(x86)", "/pf86/common"),
            ("ProgramFiles", "/pf"),
            ("ProgramFiles(x86)", "/pf86"),
            ("SystemRoot", "/windows"),
        ])
    }

    #[test]
    fn every_folder_resolves_without_panicking() {
        let empty = snapshot(&[]);
        let full = full_snapshot();
        for folder in SpecialFolder::ALL {
            assert_eq!(resolve(&empty, folder), PathBuf::new());
            let _ = resolve(&full, folder);
        }
    }

    #[test]
    fn resolution_is_deterministic_for_a_fixed_snapshot() {
        let env = full_snapshot();
        for folder in SpecialFolder::ALL {
            assert_eq!(resolve(&env, folder), resolve(&env, folder));
        }
    }

    #[test]
    fn direct_folders_return_their_root_verbatim() {
        let env = full_snapshot();
        assert_eq!(
            resolve(&env, SpecialFolder::UserProfile),
            PathBuf::from("/home/u")
        );
        assert_eq!(
            resolve(&env, SpecialFolder::ApplicationData),
            PathBuf::from("/home/u/roaming")
        );
        assert_eq!(
            resolve(&env, SpecialFolder::ProgramFilesX86),
            PathBuf::from("/pf86")
        );
        assert_eq!(
            resolve(&env, SpecialFolder::Windows),
            PathBuf::from("/windows")
        );
    }

    #[test]
    fn suffix_is_joined_with_host_separators() {
        let env = snapshot(&[("UserProfile", "/home/u")]);
        assert_eq!(
            resolve(&env, SpecialFolder::MyDocuments),
            PathBuf::from("/home/u").join("Documents")
        );
    }

    #[test]
    fn multi_component_suffixes_join_per_component() {
        let env = snapshot(&[("AppData", "/home/u/roaming")]);
        let expected = PathBuf::from("/home/u/roaming")
            .join("Microsoft")
            .join("Windows")
            .join("Start Menu");
        assert_eq!(resolve(&env, SpecialFolder::StartMenu), expected);

        let env = snapshot(&[("LocalAppData", "/home/u/local")]);
        let expected = PathBuf::from("/home/u/local")
            .join("Microsoft")
            .join("Windows")
            .join("Burn")
            .join("Burn");
        assert_eq!(resolve(&env, SpecialFolder::CDBurning), expected);
    }

    #[test]
    fn unsupported_folders_resolve_to_empty_regardless_of_environment() {
        let env = full_snapshot();
        for folder in [
            SpecialFolder::MyComputer,
            SpecialFolder::LocalizedResources,
            SpecialFolder::CommonOemLinks,
        ] {
            assert_eq!(resolve(&env, folder), PathBuf::new());
        }
    }

    #[test]
    fn missing_root_yields_empty_even_with_a_suffix() {
        let env = snapshot(&[]);
        assert_eq!(resolve(&env, SpecialFolder::ApplicationData), PathBuf::new());
        assert_eq!(resolve(&env, SpecialFolder::StartMenu), PathBuf::new());
    }

    #[test]
    fn empty_root_value_counts_as_unset() {
        let env = snapshot(&[("AppData", "")]);
        assert_eq!(resolve(&env, SpecialFolder::ApplicationData), PathBuf::new());
        assert_eq!(resolve(&env, SpecialFolder::StartMenu), PathBuf::new());
    }

    #[test]
    fn variable_lookup_is_case_insensitive() {
        let env = snapshot(&[("USERPROFILE", "/home/u"), ("PROGRAMFILES(X86)", "/pf86")]);
        assert_eq!(
            resolve(&env, SpecialFolder::UserProfile),
            PathBuf::from("/home/u")
        );
        assert_eq!(
            resolve(&env, SpecialFolder::ProgramFilesX86),
            PathBuf::from("/pf86")
        );
    }

    #[test]
    fn aliased_folders_agree() {
        let env = full_snapshot();
        assert_eq!(
            resolve(&env, SpecialFolder::Desktop),
            resolve(&env, SpecialFolder::DesktopDirectory)
        );
        assert_eq!(
            resolve(&env, SpecialFolder::System),
            resolve(&env, SpecialFolder::SystemX86)
        );
    }

    #[test]
    fn windows_children_hang_off_the_system_root() {
        let env = snapshot(&[("SystemRoot", "/windows")]);
        assert_eq!(
            resolve(&env, SpecialFolder::System),
            PathBuf::from("/windows").join("System32")
        );
        assert_eq!(
            resolve(&env, SpecialFolder::Fonts),
            PathBuf::from("/windows").join("Fonts")
        );
        assert_eq!(
            resolve(&env, SpecialFolder::Resources),
            PathBuf::from("/windows").join("resources")
        );
    }

    #[test]
    fn public_folders_hang_off_the_public_root() {
        let env = snapshot(&[("Public", "/public")]);
        assert_eq!(
            resolve(&env, SpecialFolder::CommonDesktopDirectory),
            PathBuf::from("/public").join("Desktop")
        );
        assert_eq!(
            resolve(&env, SpecialFolder::CommonDocuments),
            PathBuf::from("/public").join("Documents")
        );
    }

    #[test]
    fn roots_are_independent_of_each_other() {
        // Only the rule's own root matters; unrelated variables change nothing.
        let sparse = snapshot(&[("ProgramData", "/programdata")]);
        assert_eq!(
            resolve(&sparse, SpecialFolder::CommonStartMenu),
            PathBuf::from("/programdata")
                .join("Microsoft")
                .join("Windows")
                .join("Start Menu")
        );
        assert_eq!(resolve(&sparse, SpecialFolder::Desktop), PathBuf::new());
    }
}
