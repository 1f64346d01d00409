use crate::credentials::CredentialProvider;
use crate::drag::{self, DropTarget};
use crate::mutation::{self, CascadeWarning};
use crate::node::{NodeRef, Selection};
use crate::selection::{EditForm, SelectionState};
use crate::sync::{NavigationApi, SyncError, fetch_config};
use biz_service::entitys::nav_entity::NavConfig;
use biz_service::nav::{default_nav_config, schema};
use common::util::common_utils::build_id;
use log::{info, warn};

/// 删除会连带子节点时的确认
pub trait Confirm {
    fn confirm(&self, warning: &CascadeWarning) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&CascadeWarning) -> bool,
{
    fn confirm(&self, warning: &CascadeWarning) -> bool {
        self(warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    NothingToSave,
    AlreadySaving,
}

/// 保存进行中交给传输层的快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSave {
    pub name: String,
    pub config: NavConfig,
}

/// 对某个命名导航配置的一次编辑会话
#[derive(Debug, Clone)]
pub struct EditorSession {
    name: String,
    working: NavConfig,
    last_saved: NavConfig,
    selection: SelectionState,
    saving: bool,
    warning: Option<String>,
    error: Option<String>,
}

impl EditorSession {
    pub fn new(name: impl Into<String>, config: NavConfig) -> Self {
        Self {
            name: name.into(),
            working: config.clone(),
            last_saved: config,
            selection: SelectionState::default(),
            saving: false,
            warning: None,
            error: None,
        }
    }

    /// 加载失败（网络或校验）时退回内置默认配置并给出提示；文档不存在时静默退回
    pub async fn load(api: &dyn NavigationApi, name: &str) -> Self {
        match fetch_config(api, name).await {
            Ok(Some(config)) => Self::new(name, config),
            Ok(None) => {
                info!("navigation `{}` not stored yet, using default", name);
                Self::new(name, default_nav_config())
            }
            Err(SyncError::Schema(e)) => {
                warn!("navigation `{}` failed validation, using default: {}", name, e);
                Self::fallback(name, format!("Saved navigation is invalid ({e}); showing the default menu."))
            }
            Err(e) => {
                warn!("navigation `{}` could not be loaded, using default: {}", name, e);
                Self::fallback(name, format!("Could not load navigation ({e}); showing the default menu."))
            }
        }
    }

    fn fallback(name: &str, warning: String) -> Self {
        let mut session = Self::new(name, default_nav_config());
        session.warning = Some(warning);
        session
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn working(&self) -> &NavConfig {
        &self.working
    }

    pub fn last_saved(&self) -> &NavConfig {
        &self.last_saved
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.working != self.last_saved
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn can_save(&self) -> bool {
        self.is_dirty() && !self.saving
    }

    pub fn can_reset(&self) -> bool {
        self.is_dirty()
    }

    // ==== 结构编辑 ====

    pub fn add_primary_link(&mut self) -> String {
        let id = build_id();
        self.working = mutation::add_primary_link(&self.working, id.clone());
        id
    }

    pub fn add_mega_menu(&mut self) -> String {
        let id = build_id();
        self.working = mutation::add_mega_menu(&self.working, id.clone());
        id
    }

    /// 菜单已不存在时返回 `None`
    pub fn add_group(&mut self, menu_id: &str) -> Option<String> {
        self.working.menu(menu_id)?;
        let id = build_id();
        self.working = mutation::add_group(&self.working, menu_id, id.clone());
        Some(id)
    }

    pub fn add_item(&mut self, menu_id: &str, group_id: &str) -> Option<String> {
        self.working.group(menu_id, group_id)?;
        let id = build_id();
        self.working = mutation::add_item(&self.working, menu_id, group_id, id.clone());
        Some(id)
    }

    pub fn delete(&mut self, target: &NodeRef, confirm: &dyn Confirm) -> DeleteOutcome {
        if !target.exists_in(&self.working) {
            return DeleteOutcome::NotFound;
        }
        if let Some(warning) = mutation::cascade_warning(&self.working, target) {
            if !confirm.confirm(&warning) {
                return DeleteOutcome::Declined;
            }
        }
        self.working = mutation::delete_node(&self.working, target);
        self.selection.clear_if_within(target);
        DeleteOutcome::Deleted
    }

    pub fn on_drop(&mut self, dragged: &NodeRef, target: &DropTarget) {
        self.working = drag::on_drop(&self.working, dragged, target);
        self.selection.reconcile(&self.working);
    }

    // ==== 选中 ====

    pub fn select(&mut self, target: &Selection) -> bool {
        self.selection.select(&self.working, target)
    }

    pub fn close_selection(&mut self) {
        self.selection.close();
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.selection()
    }

    pub fn form(&self) -> Option<&EditForm> {
        self.selection.form()
    }

    pub fn form_mut(&mut self) -> Option<&mut EditForm> {
        self.selection.form_mut()
    }

    pub fn submit_form(&mut self) {
        self.working = self.selection.submit(&self.working);
    }

    // ==== 持久化 ====

    /// 丢弃修改，回到上次保存的状态
    pub fn reset(&mut self) {
        self.working = self.last_saved.clone();
        self.selection.close();
    }

    /// 标记保存开始；已有保存进行中或没有改动时返回 `None`
    pub fn begin_save(&mut self) -> Option<PendingSave> {
        if self.saving || !self.is_dirty() {
            return None;
        }
        self.saving = true;
        Some(PendingSave { name: self.name.clone(), config: self.working.clone() })
    }

    /// 结束保存：成功则以发送的树为基线，失败保留工作副本并记录错误
    pub fn finish_save(&mut self, pending: PendingSave, result: Result<serde_json::Value, SyncError>) -> Result<(), SyncError> {
        self.saving = false;
        match result {
            Ok(echo) => {
                if let Ok(stored) = schema::validate(&echo) {
                    if stored != pending.config {
                        warn!("navigation `{}` was stored with changes by the server", pending.name);
                    }
                }
                info!("navigation `{}` saved", pending.name);
                self.last_saved = pending.config;
                self.error = None;
                self.warning = None;
                Ok(())
            }
            Err(e) => {
                warn!("saving navigation `{}` failed: {}", pending.name, e);
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn save(&mut self, api: &dyn NavigationApi, credentials: &dyn CredentialProvider) -> Result<SaveOutcome, SyncError> {
        if self.saving {
            return Ok(SaveOutcome::AlreadySaving);
        }
        let Some(pending) = self.begin_save() else {
            return Ok(SaveOutcome::NothingToSave);
        };
        let result = match credentials.token() {
            Some(token) => api.store(&pending.name, &pending.config, &token).await,
            None => Err(SyncError::Unauthorized),
        };
        self.finish_save(pending, result).map(|_| SaveOutcome::Saved)
    }
}
