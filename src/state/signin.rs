use std::sync::Arc;

use crate::action::Action;

use super::models::Session;

pub(super) fn reduce(signin: &Arc<Session>, action: &Action) -> Arc<Session> {
    match action {
        // Toggles the record's own flag; the default record is falsy, so the
        // first toggle yields true.
        Action::ToggleError => {
            let mut next = Session::clone(signin);
            next.error = !next.error;
            Arc::new(next)
        }

        Action::ErrorTrue { message } => {
            let mut next = Session::clone(signin);
            next.error = true;
            next.message = Some(message.clone());
            Arc::new(next)
        }

        Action::ErrorFalse => {
            let mut next = Session::clone(signin);
            next.error = false;
            Arc::new(next)
        }

        Action::EditUser { name, id } => {
            let mut next = Session::clone(signin);
            if let Some(name) = name {
                next.name = Some(name.clone());
            }
            if let Some(id) = id {
                next.id = Some(id.clone());
            }
            Arc::new(next)
        }

        Action::UpdateState { signin } => Arc::clone(signin),

        _ => Arc::clone(signin),
    }
}
