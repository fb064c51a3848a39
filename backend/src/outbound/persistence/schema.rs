//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Email/password credentials owned by the identity adapter.
    credentials (user_id) {
        user_id -> Uuid,
        email -> Varchar,
        password_hash -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Marketplace profiles keyed by the identity provider's id.
    users (id) {
        id -> Uuid,
        email -> Varchar,
        /// `founder` or `developer`; immutable after registration.
        role -> Varchar,
        name -> Text,
        github_profile -> Nullable<Text>,
        linkedin_profile -> Nullable<Text>,
        whatsapp_number -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Idea postings.
    ideas (id) {
        id -> Uuid,
        founder_id -> Uuid,
        title -> Text,
        description -> Text,
        equity_range -> Text,
        salary_range -> Text,
        skills -> Array<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Applications; unique on `(idea_id, developer_id)`.
    applications (id) {
        id -> Uuid,
        idea_id -> Uuid,
        developer_id -> Uuid,
        proposal -> Text,
        equity_request -> Text,
        salary_request -> Text,
        status -> Varchar,
        rejection_reason -> Nullable<Text>,
        created_at -> Timestamptz,
        developer_profile_snapshot -> Jsonb,
    }
}

diesel::allow_tables_to_appear_in_same_query!(credentials, users, ideas, applications);
