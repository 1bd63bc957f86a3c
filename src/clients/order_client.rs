use crate::framework::{ActorClient, FrameworkError, Page, PageRequest, ResourceClient};
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderUpdate, UserId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Orders are normally created by checkout, which runs inside the cart
/// actor with a clone of this client.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(user_id = %params.user_id))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, "Order recorded");
        Ok(order)
    }

    /// Orders owned by `user_id`, in creation order.
    #[instrument(skip(self))]
    pub async fn list_by_user(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<Page<Order>, OrderError> {
        debug!("Sending request");
        self.inner
            .query(OrderFilter { user_id }, page)
            .await
            .map_err(Self::map_error)
    }

    /// Overwrites the status of an order.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: String) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .update(id, OrderUpdate { status })
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(_) => OrderError::NotFound(id),
                other => Self::map_error(other),
            })
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.entity_error::<OrderError>() {
            Ok(err) => err,
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
