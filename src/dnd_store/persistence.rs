use std::path::Path;

use super::DndStore;
use super::drop_target::DropTarget;

pub const DROP_TARGET_LAYOUT_VERSION: u32 = 1;

#[derive(Debug)]
pub enum LayoutPersistenceError {
    UnsupportedVersion { found: u32, expected: u32 },
    RonSerialize(ron::Error),
    RonDeserialize(ron::error::SpannedError),
    Io(std::io::Error),
}

impl std::fmt::Display for LayoutPersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedVersion { found, expected } => {
                write!(
                    f,
                    "unsupported drop target layout version: {found} (expected {expected})"
                )
            }
            Self::RonSerialize(err) => write!(f, "ron serialize error: {err}"),
            Self::RonDeserialize(err) => write!(f, "ron deserialize error: {err}"),
            Self::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for LayoutPersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnsupportedVersion { .. } => None,
            Self::RonSerialize(err) => Some(err),
            Self::RonDeserialize(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LayoutPersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::Error> for LayoutPersistenceError {
    fn from(err: ron::Error) -> Self {
        Self::RonSerialize(err)
    }
}

impl From<ron::error::SpannedError> for LayoutPersistenceError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::RonDeserialize(err)
    }
}

/// The registered drop targets of a store, without any drag state or derived flags.
///
/// Lets a host restore its drop zones (e.g. a saved board layout) before the first frame
/// has laid anything out.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DropTargetLayout {
    pub version: u32,

    /// In registry order.
    pub targets: Vec<DropTarget>,
}

fn pretty_ron_config() -> ron::ser::PrettyConfig {
    ron::ser::PrettyConfig::new()
        .depth_limit(16)
        .separate_tuple_members(true)
}

impl<Meta> DndStore<Meta> {
    pub fn drop_target_layout(&self) -> DropTargetLayout {
        DropTargetLayout {
            version: DROP_TARGET_LAYOUT_VERSION,
            targets: self
                .drop_targets()
                .map(|state| state.target.clone())
                .collect(),
        }
    }

    /// Registers every target of `layout`, in order, through [`Self::register_drop_target`].
    ///
    /// Returns the number of targets registered. Targets already in the store that are not part
    /// of `layout` are kept.
    ///
    /// # Errors
    /// [`LayoutPersistenceError::UnsupportedVersion`] if `layout` was written by another format
    /// version. Nothing is registered in that case.
    pub fn load_drop_target_layout(
        &mut self,
        layout: DropTargetLayout,
    ) -> Result<usize, LayoutPersistenceError> {
        if layout.version != DROP_TARGET_LAYOUT_VERSION {
            return Err(LayoutPersistenceError::UnsupportedVersion {
                found: layout.version,
                expected: DROP_TARGET_LAYOUT_VERSION,
            });
        }

        let count = layout.targets.len();
        for target in layout.targets {
            self.register_drop_target(target);
        }
        log::debug!("loaded {count} drop targets from layout");
        Ok(count)
    }

    /// # Errors
    /// Fails if RON serialization fails.
    pub fn drop_target_layout_to_ron_string(&self) -> Result<String, LayoutPersistenceError> {
        Ok(ron::ser::to_string_pretty(
            &self.drop_target_layout(),
            pretty_ron_config(),
        )?)
    }

    /// # Errors
    /// Fails on malformed RON or an unsupported layout version.
    pub fn load_drop_target_layout_from_ron_str(
        &mut self,
        ron: &str,
    ) -> Result<usize, LayoutPersistenceError> {
        let layout: DropTargetLayout = ron::from_str(ron)?;
        self.load_drop_target_layout(layout)
    }

    /// # Errors
    /// Fails on serialization or I/O errors.
    pub fn save_drop_target_layout_to_ron_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<(), LayoutPersistenceError> {
        let ron = self.drop_target_layout_to_ron_string()?;
        std::fs::write(path, ron)?;
        Ok(())
    }

    /// # Errors
    /// Fails on I/O errors, malformed RON or an unsupported layout version.
    pub fn load_drop_target_layout_from_ron_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<usize, LayoutPersistenceError> {
        let ron = std::fs::read_to_string(path)?;
        self.load_drop_target_layout_from_ron_str(&ron)
    }
}
