//! Routing, history and the detail screen's fetch lifecycle

use std::sync::Arc;

use userdesk_admin::app::bootstrap::boot;
use userdesk_admin::common::messages::DomainMessage;
use userdesk_admin::domains::navigation::Route;
use userdesk_admin::domains::navigation::messages::Message as NavMessage;
use userdesk_admin::domains::user_detail::messages::Message as DetailMessage;
use userdesk_admin::domains::users::UsersLoadState;
use userdesk_admin::infra::requests::RequestToken;
use userdesk_admin::infra::services::UserAdminService;
use userdesk_admin::infra::testing::StubUserAdminService;
use userdesk_admin::state::State;
use userdesk_admin::update::update;
use userdesk_model::UserId;

fn booted(stub: &Arc<StubUserAdminService>) -> State {
    let (state, _task) = boot(stub.clone());
    state
}

fn navigate(state: &mut State, message: NavMessage) {
    let _ = update(state, DomainMessage::from(message));
}

fn detail_token(state: &State) -> RequestToken {
    state
        .domains
        .user_detail
        .state
        .active_request
        .expect("a detail fetch should be in flight")
}

async fn complete_detail(
    state: &mut State,
    stub: &StubUserAdminService,
    token: RequestToken,
    id: UserId,
) {
    let result = stub.get_user(id).await.map_err(|e| e.to_string());
    let _ = update(
        state,
        DomainMessage::from(DetailMessage::UserLoaded { token, id, result }),
    );
}

#[tokio::test]
async fn detail_path_mounts_detail_and_fetches_record() {
    let stub = Arc::new(StubUserAdminService::with_sample_users());
    let mut state = booted(&stub);

    navigate(&mut state, NavMessage::NavigateTo("/user/2".to_string()));

    assert_eq!(state.domains.navigation.current(), Route::UserDetail(UserId(2)));
    assert!(state.domains.navigation.can_go_back());
    assert!(state.domains.user_detail.state.is_loading());
    // Leaving the list aborts its load
    assert!(state.domains.users.state.requests.is_empty());

    let token = detail_token(&state);
    complete_detail(&mut state, &stub, token, UserId(2)).await;

    let detail = &state.domains.user_detail.state;
    let user = detail.user.as_ref().expect("record loaded");
    assert_eq!(user.name, "Ervin Howell");
    assert_eq!(user.address.display_line(), "Kulas Light, Gwenborough");
    assert_eq!(detail.active_request, None);
}

#[tokio::test]
async fn failed_detail_fetch_keeps_loading_placeholder() {
    let stub = Arc::new(StubUserAdminService::with_sample_users());
    let mut state = booted(&stub);

    navigate(&mut state, NavMessage::Navigate(Route::UserDetail(UserId(42))));
    let token = detail_token(&state);
    complete_detail(&mut state, &stub, token, UserId(42)).await;

    let detail = &state.domains.user_detail.state;
    assert_eq!(detail.user, None);
    assert!(detail.is_loading());
}

#[tokio::test]
async fn switching_user_drops_the_superseded_fetch() {
    let stub = Arc::new(StubUserAdminService::with_sample_users());
    let mut state = booted(&stub);

    navigate(&mut state, NavMessage::Navigate(Route::UserDetail(UserId(1))));
    let first = detail_token(&state);
    navigate(&mut state, NavMessage::Navigate(Route::UserDetail(UserId(2))));
    let second = detail_token(&state);

    assert_ne!(first, second);
    assert!(!state.domains.user_detail.state.requests.is_in_flight(first));

    complete_detail(&mut state, &stub, first, UserId(1)).await;
    assert_eq!(state.domains.user_detail.state.user, None);

    complete_detail(&mut state, &stub, second, UserId(2)).await;
    let shown = state.domains.user_detail.state.user.as_ref().map(|u| u.id);
    assert_eq!(shown, Some(UserId(2)));
}

#[tokio::test]
async fn reload_of_same_user_keeps_shown_record() {
    let stub = Arc::new(StubUserAdminService::with_sample_users());
    let mut state = booted(&stub);

    navigate(&mut state, NavMessage::Navigate(Route::UserDetail(UserId(3))));
    let token = detail_token(&state);
    complete_detail(&mut state, &stub, token, UserId(3)).await;

    let _ = update(
        &mut state,
        DomainMessage::from(DetailMessage::Load(UserId(3))),
    );

    assert!(state.domains.user_detail.state.user.is_some());
    assert!(state.domains.user_detail.state.active_request.is_some());
}

#[tokio::test]
async fn back_returns_to_list_and_reloads_it() {
    let stub = Arc::new(StubUserAdminService::with_sample_users());
    let mut state = booted(&stub);

    navigate(&mut state, NavMessage::Navigate(Route::UserDetail(UserId(1))));
    navigate(&mut state, NavMessage::NavigateBack);

    assert_eq!(state.domains.navigation.current(), Route::Users);
    assert!(!state.domains.navigation.can_go_back());
    assert_eq!(state.domains.users.state.load_state, UsersLoadState::Loading);
    assert_eq!(state.domains.users.state.requests.len(), 1);

    let detail = &state.domains.user_detail.state;
    assert_eq!(detail.user_id, None);
    assert!(detail.requests.is_empty());
}

#[tokio::test]
async fn back_with_empty_history_is_a_no_op() {
    let stub = Arc::new(StubUserAdminService::with_sample_users());
    let mut state = booted(&stub);
    let token = state.domains.users.state.requests.last_issued();

    navigate(&mut state, NavMessage::NavigateBack);

    assert_eq!(state.domains.navigation.current(), Route::Users);
    assert_eq!(state.domains.users.state.requests.last_issued(), token);
}

#[tokio::test]
async fn unknown_or_malformed_paths_are_ignored() {
    let stub = Arc::new(StubUserAdminService::with_sample_users());
    let mut state = booted(&stub);

    for path in ["/user/abc", "/users/1", "/user/"] {
        navigate(&mut state, NavMessage::NavigateTo(path.to_string()));
        assert_eq!(state.domains.navigation.current(), Route::Users, "{path}");
    }
    assert!(!state.domains.navigation.can_go_back());
}

#[tokio::test]
async fn navigating_to_current_route_does_not_remount() {
    let stub = Arc::new(StubUserAdminService::with_sample_users());
    let mut state = booted(&stub);
    let token = state.domains.users.state.requests.last_issued();

    navigate(&mut state, NavMessage::NavigateTo("/".to_string()));

    assert_eq!(state.domains.users.state.requests.last_issued(), token);
    assert!(!state.domains.navigation.can_go_back());
}
