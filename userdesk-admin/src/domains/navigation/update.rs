use iced::Task;
use log::{debug, info, warn};

use crate::{
    common::messages::DomainMessage,
    domains::navigation::{messages::Message, route::Route},
    domains::{user_detail, users},
    state::State,
};

/// Handle navigation messages
pub fn update_navigation(state: &mut State, message: Message) -> Task<DomainMessage> {
    debug!("Navigation update: {}", message.name());

    match message {
        Message::Navigate(route) => navigate(state, route),

        Message::NavigateTo(path) => match Route::parse(&path) {
            Ok(route) => navigate(state, route),
            Err(err) => {
                warn!("Ignoring navigation to '{}': {}", path, err);
                Task::none()
            }
        },

        Message::NavigateBack => {
            let Some(previous) = state.domains.navigation.state.history.pop() else {
                debug!("Navigation history is empty, staying on current route");
                return Task::none();
            };
            info!("Navigating back to {}", previous);
            enter(state, previous)
        }
    }
}

fn navigate(state: &mut State, route: Route) -> Task<DomainMessage> {
    let nav = &mut state.domains.navigation.state;
    if nav.current == route {
        return Task::none();
    }

    info!("Navigating from {} to {}", nav.current, route);
    nav.history.push(nav.current);
    enter(state, route)
}

/// Make `route` current, unmounting the screen being left and mounting the
/// one being entered. Moving between two detail routes keeps the detail
/// screen mounted and only swaps the user being shown.
pub fn enter(state: &mut State, route: Route) -> Task<DomainMessage> {
    let previous =
        std::mem::replace(&mut state.domains.navigation.state.current, route);

    match (previous, route) {
        (Route::UserDetail(_), Route::UserDetail(id)) => {
            user_detail::update::show_user(&mut state.domains.user_detail.state, id)
        }
        (previous, next) => {
            unmount(state, previous);
            mount(state, next)
        }
    }
}

fn unmount(state: &mut State, route: Route) {
    match route {
        Route::Users => users::update_handlers::unmount(&mut state.domains.users.state),
        Route::UserDetail(_) => {
            user_detail::update::unmount(&mut state.domains.user_detail.state)
        }
    }
}

fn mount(state: &mut State, route: Route) -> Task<DomainMessage> {
    match route {
        Route::Users => users::update_handlers::mount(&mut state.domains.users.state),
        Route::UserDetail(id) => {
            user_detail::update::show_user(&mut state.domains.user_detail.state, id)
        }
    }
}
