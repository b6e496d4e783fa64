//! Wire types shared by the RAG chat client.
//!
//! Each use case keeps its request/response DTOs in its own module so the
//! frontend can import exactly the shapes the remote service speaks.

pub mod shared;
pub mod usecases;
