use crate::models::SessionUser;

/// Async interface for persisting the signed-in user across launches.
pub trait SessionStore {
    fn load(&self) -> impl std::future::Future<Output = Option<SessionUser>>;
    fn save(&self, user: &SessionUser) -> impl std::future::Future<Output = ()>;
    fn clear(&self) -> impl std::future::Future<Output = ()>;
}
