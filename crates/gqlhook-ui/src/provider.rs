//! Provider component that broadcasts endpoint settings to its subtree.

use std::collections::BTreeMap;

use yew::prelude::*;

use crate::context::GraphqlCtx;

/// Props for [`GraphqlProvider`].
#[derive(Properties, PartialEq)]
pub struct GraphqlProviderProps {
    /// GraphQL server endpoint URI.
    pub endpoint: AttrValue,
    /// Optional HTTP headers added to every request.
    #[prop_or_default]
    pub headers: Option<BTreeMap<String, String>>,
    /// Wrapped content.
    #[prop_or_default]
    pub children: Children,
}

/// Put this around the app (or any subtree) so `use_graphql` picks up the endpoint.
#[function_component(GraphqlProvider)]
pub fn graphql_provider(props: &GraphqlProviderProps) -> Html {
    let ctx = use_memo(
        |(endpoint, headers)| GraphqlCtx::from_props(endpoint, headers.as_ref()),
        (props.endpoint.clone(), props.headers.clone()),
    );

    html! {
        <ContextProvider<GraphqlCtx> context={(*ctx).clone()}>
            { for props.children.iter() }
        </ContextProvider<GraphqlCtx>>
    }
}
