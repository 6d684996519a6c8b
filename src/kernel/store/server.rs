use crate::kernel::{Action, Effect, HierarchyEvent, NavError};

impl super::Store {
    pub(super) fn reduce_server_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::Load { root_path } => self.begin_load(root_path),
            Action::Reload => match self.state.load.root_path.clone() {
                Some(root_path) => self.begin_load(root_path),
                None => super::DispatchResult::unchanged(),
            },
            Action::HierarchyFetched { generation, result } => {
                if !self.state.load.is_latest(generation) {
                    tracing::debug!(
                        generation,
                        latest = self.state.load.generation,
                        "dropping stale hierarchy response"
                    );
                    return super::DispatchResult::unchanged();
                }
                self.state.load.pending = None;

                let value = match result {
                    Ok(value) => value,
                    Err(err) => return self.reject("load", NavError::from(err)),
                };
                if let Err(err) = self.state.tree.load(value) {
                    return self.reject("load", NavError::from(err));
                }
                let Some(root) = self.state.tree.root() else {
                    return super::DispatchResult::unchanged();
                };

                self.state.nav.reset_to(root);
                tracing::info!(
                    generation,
                    nodes = self.state.tree.len(),
                    root = self.state.tree.name(root).unwrap_or_default(),
                    "hierarchy loaded"
                );
                super::DispatchResult {
                    effects: vec![Effect::RenderSelector, Effect::RenderTabs],
                    state_changed: true,
                }
            }
            Action::HierarchyDeleted { path, result } => match result {
                Ok(()) => {
                    tracing::info!(path = %path, "hierarchy deleted");
                    super::DispatchResult {
                        effects: vec![Effect::Publish(HierarchyEvent::HierarchyChanged)],
                        state_changed: false,
                    }
                }
                Err(err) => self.reject("delete", NavError::from(err)),
            },
            Action::KappaExported { path, result } => match result {
                Ok(export) => {
                    tracing::info!(path = %path, bytes = export.kappa_code.len(), "kappa exported");
                    super::DispatchResult {
                        effects: vec![Effect::Download {
                            file_name: self.state.config.export_file_name.clone(),
                            content: export.kappa_code,
                        }],
                        state_changed: false,
                    }
                }
                Err(err) => self.reject("export", NavError::from(err)),
            },
            _ => unreachable!("non-server action passed to reduce_server_action"),
        }
    }

    fn begin_load(&mut self, root_path: String) -> super::DispatchResult {
        let generation = self.state.load.begin(root_path.clone());
        tracing::info!(generation, root_path = %root_path, "loading hierarchy");
        super::DispatchResult {
            effects: vec![Effect::FetchHierarchy {
                generation,
                root_path,
                include_graphs: self.state.config.include_graphs,
            }],
            state_changed: false,
        }
    }
}
