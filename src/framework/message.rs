//! # Generic Messages
//!
//! Message types exchanged between the `ResourceClient` and `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the lifecycle of an append-only resource collection:
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize and append a new resource.
///   Responds with the stored entity.
/// - **Get**: Fetches the current state of one resource by ID.
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **List**: Returns every resource selected by an [`ActorEntity::Query`], in ID order.
/// - **Count**: Counts the resources selected by a query without cloning them.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    List {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
    Count {
        query: T::Query,
        respond_to: Response<usize>,
    },
}
