//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! One dynamic route per registered definition, each forwarding to the shared
//! [`ToolDispatcher`]. Adding a tool to the table is enough to expose it.

use futures::FutureExt;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};

use super::dispatcher::ToolDispatcher;
use super::handlers::to_call_result;
use super::registry::to_tool;
use super::schema::ToolDefinition;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(dispatcher: ToolDispatcher) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let mut router = ToolRouter::new();
    for def in dispatcher.registry().iter() {
        router = router.with_route(create_route(def, dispatcher.clone()));
    }
    router
}

/// Route for one definition. Client cancellation aborts the backend request.
fn create_route<S>(def: &ToolDefinition, dispatcher: ToolDispatcher) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = def.name;
    ToolRoute::new_dyn(to_tool(def), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let ct = ctx.request_context.ct.clone();
        let dispatcher = dispatcher.clone();
        async move {
            let outcome = dispatcher
                .invoke_cancellable(name, args, async move { ct.cancelled().await })
                .await;
            Ok(to_call_result(outcome))
        }
        .boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::BackendConfig;

    struct TestServer {}

    fn test_dispatcher() -> ToolDispatcher {
        ToolDispatcher::from_config(&BackendConfig::default()).unwrap()
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_dispatcher());
        let tools = router.list_all();
        assert_eq!(tools.len(), 86);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_public_config"));
        assert!(names.contains(&"grant_authz_policy"));
        assert!(names.contains(&"batch_delete_card_secrets"));
        assert!(names.contains(&"refund_order_to_wallet"));
        assert!(names.contains(&"update_settings"));
    }

    #[test]
    fn test_registry_matches_router() {
        let dispatcher = test_dispatcher();
        let registry_names = dispatcher.registry().tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(dispatcher);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_route_schema_is_strict() {
        let router: ToolRouter<TestServer> = build_tool_router(test_dispatcher());
        let tools = router.list_all();
        let login = tools.iter().find(|t| t.name == "admin_login").unwrap();
        assert_eq!(login.input_schema["additionalProperties"], false);
        assert_eq!(
            login.input_schema["required"],
            serde_json::json!(["username", "password"])
        );
    }
}
