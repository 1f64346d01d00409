//! 导航配置编辑器
//!
//! 编辑器持有 [`NavConfig`] 的工作副本和上次保存的快照。结构编辑是 [`mutation`]
//! 与 [`drag`] 中的纯函数，[`session::EditorSession`] 把它们和选中状态、脏标记、
//! 以及 [`sync`] 的加载保存串起来。

pub mod credentials;
pub mod drag;
pub mod mutation;
pub mod node;
pub mod selection;
pub mod session;
pub mod sync;

pub use biz_service::entitys::nav_entity::{ItemIcon, ItemTone, MegaMenu, MenuGroup, MenuItem, NavConfig, PrimaryLink};
pub use credentials::{CredentialProvider, SessionStorageCredentials, StaticCredentials};
pub use drag::{DropTarget, on_drop};
pub use mutation::{CascadeWarning, FieldPatch};
pub use node::{NodeKind, NodeRef, Selection};
pub use selection::EditForm;
pub use session::{Confirm, DeleteOutcome, EditorSession, PendingSave, SaveOutcome};
pub use sync::{HttpNavigationApi, NavigationApi, SyncError, fetch_config};
