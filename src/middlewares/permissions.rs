use std::{
    convert::Infallible,
    task::{Context, Poll},
};

use axum::{
    http::Request,
    response::{IntoResponse, Response},
};
use entity::users::UserRole;
use futures::future::BoxFuture;
use tower::{Layer, Service};

use crate::{auth::Claims, error};

type RoleList = &'static [UserRole];

#[derive(Debug, Clone)]
pub struct PermissionsLayer {
    roles: RoleList,
}

impl PermissionsLayer {
    pub fn new(roles: RoleList) -> Self {
        Self { roles }
    }
}

impl<S> Layer<S> for PermissionsLayer {
    type Service = Permissions<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Permissions::new(inner, self.roles)
    }
}

#[derive(Debug, Clone)]
pub struct Permissions<S> {
    inner: S,
    roles: RoleList,
}

impl<S> Permissions<S> {
    fn new(inner: S, roles: RoleList) -> Self {
        Permissions { inner, roles }
    }
}

impl<S, B> Service<Request<B>> for Permissions<S>
where
    S: Service<Request<B>, Error = Infallible, Response = Response> + Send,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let Some(claims) = req.extensions().get::<Claims>() else {
            return Box::pin(async { Ok(error::COULD_NOT_GET_CLAIMS.into_response()) });
        };

        if !self.roles.contains(&claims.role) {
            return Box::pin(async { Ok(error::NOT_ENOUGH_PERMISSIONS.into_response()) });
        }

        Box::pin(self.inner.call(req))
    }
}
