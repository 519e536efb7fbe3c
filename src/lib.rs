//! Pawplan: daily pet-care planning.
//!
//! This crate plans a day of pet-care tasks against an owner's time budget,
//! reports tasks that share a start time, and advances recurring tasks to
//! their next occurrence when they are completed.
//!
//! # Architecture
//!
//! Pawplan follows hexagonal architecture principles:
//!
//! - **Domain**: Pure household and planning logic with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for household storage
//! - **Adapters**: Concrete implementations of ports (in-memory)
//!
//! # Modules
//!
//! - [`care`]: Owners, pets, tasks and the recurrence state machine
//! - [`schedule`]: Greedy daily plan builder, plan summary and conflict
//!   detection
//!
//! # Example
//!
//! ```
//! use mockable::DefaultClock;
//! use pawplan::care::domain::{Owner, Pet, Task};
//! use pawplan::schedule::Scheduler;
//!
//! let mut owner = Owner::new("Sam", 60).expect("valid owner");
//! let mut dog = Pet::new("Rex", "Dog", 4).expect("valid pet");
//! dog.add_task(Task::new("Walk", 30, 5).expect("valid task").with_required(true));
//! dog.add_task(Task::new("Brush", 20, 3).expect("valid task"));
//! owner.add_pet(dog);
//!
//! let mut scheduler = Scheduler::new(&owner, &DefaultClock);
//! let plan = scheduler.generate_daily_plan().expect("required tasks fit");
//! assert_eq!(plan.len(), 2);
//! ```

pub mod care;
pub mod schedule;
