mod client;

pub use client::{
    ChatRequest, ChatResponse, ComplaintService, ConversationId, HttpComplaintClient,
    decode_response,
};
