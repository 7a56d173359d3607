//! Diesel schema for board persistence.

diesel::table! {
    /// Project records.
    projects (id) {
        /// Storage-assigned identifier.
        id -> Int8,
        /// Unique project name.
        #[max_length = 100]
        name -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Developer records.
    developers (id) {
        /// Storage-assigned identifier.
        id -> Int8,
        /// Display name.
        name -> Text,
        /// Unique email address.
        #[max_length = 255]
        email -> Varchar,
        /// Optional role description.
        role -> Nullable<Text>,
        /// Project membership, `NULL` when unassigned.
        project_id -> Nullable<Int8>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Storage-assigned identifier.
        id -> Int8,
        /// Task title.
        #[max_length = 200]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Workflow status.
        #[max_length = 20]
        status -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Owning project.
        project_id -> Int8,
        /// Assigned developer, `NULL` when unassigned.
        assigned_to_id -> Nullable<Int8>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(developers -> projects (project_id));
diesel::joinable!(tasks -> projects (project_id));
diesel::joinable!(tasks -> developers (assigned_to_id));

diesel::allow_tables_to_appear_in_same_query!(developers, projects, tasks);
