use super::HierarchyNavigator;
use crate::kernel::{Action, Effect};
use crate::views::{render_ancestor_selector, render_children_tabs};

impl HierarchyNavigator {
    /// Runs `action` through the store and executes the resulting effects.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        let mut state_changed = result.state_changed;
        for effect in result.effects {
            state_changed |= self.run_effect(effect);
        }
        state_changed
    }

    fn run_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::FetchHierarchy {
                generation,
                root_path,
                include_graphs,
            } => {
                self.in_flight += 1;
                self.runtime
                    .fetch_hierarchy(generation, root_path, include_graphs);
                false
            }
            Effect::ConfirmDelete { path, prompt } => {
                if self.frontend.confirm(&prompt) {
                    self.dispatch(Action::DeleteConfirmed { path })
                } else {
                    tracing::debug!(path = %path, "delete declined");
                    false
                }
            }
            Effect::DeleteHierarchy { path } => {
                self.in_flight += 1;
                self.runtime.delete_hierarchy(path);
                false
            }
            Effect::ExportKappa { path, names } => {
                self.in_flight += 1;
                self.runtime.export_kappa(path, names);
                false
            }
            Effect::Download { file_name, content } => {
                self.frontend.download(&file_name, &content);
                false
            }
            Effect::Publish(event) => {
                self.bus.publish(event);
                false
            }
            Effect::ReportError(message) => {
                self.frontend.report_error(&message);
                false
            }
            Effect::RenderSelector => {
                let options = render_ancestor_selector(self.store.state());
                self.view.render_selector(options);
                false
            }
            Effect::RenderTabs => {
                let tabs = render_children_tabs(self.store.state());
                self.view.render_tabs(tabs);
                false
            }
        }
    }
}
