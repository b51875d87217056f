//! When steps for ordered task list BDD scenarios.

use super::world::{TaskListWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tasklist::task::domain::StatusFilter;

#[when(r#"the task "{name}" is added"#)]
fn task_is_added(world: &mut TaskListWorld, name: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(name.as_str()))
        .wrap_err_with(|| format!("add task {name}"))?;
    world.ids_by_text.insert(name, created.id());
    Ok(())
}

#[when(r#"the task "{name}" is marked completed"#)]
fn task_is_marked_completed(world: &mut TaskListWorld, name: String) {
    let id = world.id_for(&name);
    let result = run_async(world.service.set_completion(id, true)).map(|_| ());
    world.last_result = Some(result);
}

#[when(r#"the task "{name}" is deleted"#)]
fn task_is_deleted(world: &mut TaskListWorld, name: String) {
    let id = world.id_for(&name);
    let result = run_async(world.service.delete(id));
    world.last_result = Some(result);
}

#[when(r#"the tasks are reordered as "{names}""#)]
fn tasks_are_reordered(world: &mut TaskListWorld, names: String) {
    let ids = world.ids_for_list(&names);
    let result = run_async(world.service.reorder(&ids));
    world.last_result = Some(result);
}

#[when(r#"the task at position {from} of the "{view}" view is moved to position {to}"#)]
fn task_is_moved(
    world: &mut TaskListWorld,
    from: usize,
    view: String,
    to: usize,
) -> Result<(), eyre::Report> {
    let filter = StatusFilter::try_from(view.as_str())
        .map_err(|err| eyre::eyre!("invalid view in scenario: {err}"))?;
    run_async(world.service.move_task(filter, from, to)).wrap_err("move task in scenario")?;
    Ok(())
}
