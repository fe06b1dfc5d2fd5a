//! Strong-typed UUID identifiers for all domain entities.

define_id!(JobId, "Strong typed identifier for an analysis job");
