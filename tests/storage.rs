#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskman::db::db::Db;
    use taskman::db::error::{Operation, StorageError};
    use taskman::db::tasks::Tasks;
    use taskman::libs::task::NewTask;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StorageTestContext {
        temp_dir: TempDir,
        tasks: Tasks,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::at(temp_dir.path().join("tasks.db"));
            db.start_database().unwrap();
            StorageTestContext {
                tasks: Tasks::new(db),
                temp_dir,
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_start_database_is_idempotent(ctx: &mut StorageTestContext) {
        ctx.tasks.insert(&NewTask::new("Keep me", "", date(2024, 1, 1))).unwrap();

        // Running the schema again must not drop existing rows
        ctx.tasks.db().start_database().unwrap();
        assert_eq!(ctx.tasks.fetch().unwrap().len(), 1);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_insert_assigns_increasing_ids(ctx: &mut StorageTestContext) {
        let first = ctx.tasks.insert(&NewTask::new("First", "a", date(2024, 1, 1))).unwrap();
        let second = ctx.tasks.insert(&NewTask::new("Second", "b", date(2024, 1, 2))).unwrap();

        assert_eq!(first, 1);
        assert!(second > first);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_new_tasks_are_not_done(ctx: &mut StorageTestContext) {
        let id = ctx
            .tasks
            .insert(&NewTask::new("Write report", "Quarterly numbers", date(2024, 3, 31)))
            .unwrap();

        let tasks = ctx.tasks.fetch().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].title, "Write report");
        assert_eq!(tasks[0].description, "Quarterly numbers");
        assert_eq!(tasks[0].due_date, date(2024, 3, 31));
        assert!(!tasks[0].done);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_complete_flips_done(ctx: &mut StorageTestContext) {
        let id = ctx.tasks.insert(&NewTask::new("Task", "", date(2024, 5, 1))).unwrap();
        let other = ctx.tasks.insert(&NewTask::new("Other", "", date(2024, 5, 2))).unwrap();

        assert_eq!(ctx.tasks.complete(id).unwrap(), 1);

        let tasks = ctx.tasks.fetch().unwrap();
        assert!(tasks.iter().find(|t| t.id == id).unwrap().done);
        assert!(!tasks.iter().find(|t| t.id == other).unwrap().done);

        // Completing twice still matches the row
        assert_eq!(ctx.tasks.complete(id).unwrap(), 1);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_complete_unknown_id_changes_nothing(ctx: &mut StorageTestContext) {
        assert_eq!(ctx.tasks.complete(42).unwrap(), 0);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_delete(ctx: &mut StorageTestContext) {
        let id = ctx.tasks.insert(&NewTask::new("Task", "", date(2024, 5, 1))).unwrap();
        ctx.tasks.insert(&NewTask::new("Other", "", date(2024, 5, 2))).unwrap();

        assert_eq!(ctx.tasks.delete(id).unwrap(), 1);
        assert_eq!(ctx.tasks.delete(id).unwrap(), 0);

        let remaining = ctx.tasks.fetch().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Other");
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_ids_are_not_reused_after_delete(ctx: &mut StorageTestContext) {
        let first = ctx.tasks.insert(&NewTask::new("First", "", date(2024, 5, 1))).unwrap();
        let second = ctx.tasks.insert(&NewTask::new("Second", "", date(2024, 5, 1))).unwrap();
        ctx.tasks.delete(second).unwrap();

        let third = ctx.tasks.insert(&NewTask::new("Third", "", date(2024, 5, 1))).unwrap();
        assert!(third > second);
        assert!(third > first);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_data_survives_between_connections(ctx: &mut StorageTestContext) {
        ctx.tasks.insert(&NewTask::new("Persisted", "", date(2024, 5, 1))).unwrap();

        let reopened = Tasks::new(Db::at(ctx.temp_dir.path().join("tasks.db")));
        let tasks = reopened.fetch().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Persisted");
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_select_without_table_reports_sqlite_error(ctx: &mut StorageTestContext) {
        let tasks = Tasks::new(Db::at(ctx.temp_dir.path().join("empty.db")));

        let error = tasks.fetch().unwrap_err();
        assert_eq!(error.operation(), Operation::Select);
        assert!(matches!(error, StorageError::Sqlite { .. }));
        assert!(error
            .to_string()
            .starts_with("The following sqlite error occurred while performing a select operation: "));
        assert!(error.to_string().contains("no such table"));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_write_errors_name_their_operation(ctx: &mut StorageTestContext) {
        let tasks = Tasks::new(Db::at(ctx.temp_dir.path().join("empty.db")));

        let insert = tasks.insert(&NewTask::new("Task", "", date(2024, 5, 1))).unwrap_err();
        assert!(insert.to_string().contains("while performing an insert operation"));

        let update = tasks.complete(1).unwrap_err();
        assert!(update.to_string().contains("while performing an update operation"));

        let delete = tasks.delete(1).unwrap_err();
        assert!(delete.to_string().contains("while performing a delete operation"));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_start_database_fails_for_unreachable_path(ctx: &mut StorageTestContext) {
        let db = Db::at(ctx.temp_dir.path().join("missing").join("dir").join("tasks.db"));

        let error = db.start_database().unwrap_err();
        assert_eq!(error.operation(), Operation::CreateTable);
        assert!(error
            .to_string()
            .starts_with("The following sqlite error occurred while creating the tasks table: "));
    }

    #[test]
    fn test_general_error_message() {
        let error = StorageError::general(Operation::Insert, "worker thread panicked");
        assert_eq!(
            error.to_string(),
            "The following general error occurred while performing an insert operation: worker thread panicked"
        );
    }
}
