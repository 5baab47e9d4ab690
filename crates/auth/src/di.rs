use crate::{
    abstract_trait::{DynAuthClient, DynCredentialStore, DynResourceClient},
    guard::RouteGuard,
    http::{ApiClient, BearerInterceptor},
    service::{AuthService, AuthServiceDeps, ResourceService},
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub store: DynCredentialStore,
    pub auth_client: DynAuthClient,
    pub resource_client: DynResourceClient,
    pub guard: RouteGuard,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("store", &"CredentialStore")
            .field("auth_client", &"AuthService")
            .field("resource_client", &"ResourceService")
            .field("guard", &"RouteGuard")
            .finish()
    }
}

pub struct DependenciesInjectDeps {
    pub api_base_url: String,
    pub store: DynCredentialStore,
}

impl DependenciesInject {
    /// Wires one store into the bearer interceptor, both clients and the
    /// guard.
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Result<Self> {
        let DependenciesInjectDeps {
            api_base_url,
            store,
        } = deps;

        let api = ApiClient::builder(api_base_url)
            .interceptor(Arc::new(BearerInterceptor::new(store.clone())))
            .build()
            .context("failed initialize api client")?;

        let auth_client: DynAuthClient = Arc::new(AuthService::new(
            AuthServiceDeps {
                api: api.clone(),
                store: store.clone(),
            },
            registry,
        ));

        let resource_client: DynResourceClient = Arc::new(ResourceService::new(api, registry));

        let guard = RouteGuard::new(store.clone());

        Ok(Self {
            store,
            auth_client,
            resource_client,
            guard,
        })
    }
}
