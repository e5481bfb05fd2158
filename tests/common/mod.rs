#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use taskdeck::error::TaskdeckError;
use taskdeck::gateway::TaskGateway;
use taskdeck::models::{NewTask, TaskId, TaskPriority, TaskRecord, TaskStatus};
use taskdeck::view::{ListRegion, ModalView, Screen};

// ─── fake gateway ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(NewTask),
    Patch(TaskId, TaskStatus),
    Delete(TaskId),
}

#[derive(Default)]
struct FakeState {
    tasks: Vec<TaskRecord>,
    calls: Vec<Call>,
    next_id: u64,
    fail_list: bool,
    fail_mutations: bool,
}

/// In-memory task service that records every call.
#[derive(Default)]
pub struct FakeGateway {
    state: Mutex<FakeState>,
}

impl FakeGateway {
    pub fn with_tasks(tasks: Vec<TaskRecord>) -> Self {
        let next_id = tasks
            .iter()
            .filter_map(|t| match t.id {
                TaskId::Number(n) => Some(n),
                _ => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            state: Mutex::new(FakeState {
                tasks,
                next_id,
                ..FakeState::default()
            }),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn list_calls(&self) -> usize {
        self.calls().iter().filter(|c| **c == Call::List).count()
    }

    pub fn mutation_calls(&self) -> Vec<Call> {
        self.calls().into_iter().filter(|c| *c != Call::List).collect()
    }

    pub fn stored(&self) -> Vec<TaskRecord> {
        self.state.lock().unwrap().tasks.clone()
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.state.lock().unwrap().fail_list = fail;
    }

    pub fn set_fail_mutations(&self, fail: bool) {
        self.state.lock().unwrap().fail_mutations = fail;
    }
}

#[async_trait]
impl TaskGateway for FakeGateway {
    async fn list(&self) -> Result<Vec<TaskRecord>, TaskdeckError> {
        let mut s = self.state.lock().unwrap();
        s.calls.push(Call::List);
        if s.fail_list {
            return Err(TaskdeckError::remote("connection refused"));
        }
        Ok(s.tasks.clone())
    }

    async fn create(&self, task: &NewTask) -> Result<TaskRecord, TaskdeckError> {
        let mut s = self.state.lock().unwrap();
        s.calls.push(Call::Create(task.clone()));
        if s.fail_mutations {
            return Err(TaskdeckError::remote("HTTP 500"));
        }
        let record = TaskRecord {
            id: TaskId::Number(s.next_id),
            name: task.name.clone(),
            description: task.description.clone(),
            status: task.status.clone(),
            priority: task.priority.clone(),
            created_at: "2025-01-05T10:00:00Z".to_string(),
        };
        s.next_id += 1;
        s.tasks.push(record.clone());
        Ok(record)
    }

    async fn patch_status(
        &self,
        id: &TaskId,
        status: &TaskStatus,
    ) -> Result<Option<TaskRecord>, TaskdeckError> {
        let mut s = self.state.lock().unwrap();
        s.calls.push(Call::Patch(id.clone(), status.clone()));
        if s.fail_mutations {
            return Err(TaskdeckError::remote("HTTP 500"));
        }
        let task = s
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| TaskdeckError::remote("HTTP 404"))?;
        task.status = status.clone();
        Ok(None)
    }

    async fn delete(&self, id: &TaskId) -> Result<(), TaskdeckError> {
        let mut s = self.state.lock().unwrap();
        s.calls.push(Call::Delete(id.clone()));
        if s.fail_mutations {
            return Err(TaskdeckError::remote("HTTP 500"));
        }
        s.tasks.retain(|t| &t.id != id);
        Ok(())
    }
}

pub fn task(id: u64, name: &str, status: TaskStatus) -> TaskRecord {
    TaskRecord {
        id: TaskId::Number(id),
        name: name.to_string(),
        description: format!("about {name}"),
        status,
        priority: TaskPriority::Medium,
        created_at: "2025-01-05T10:00:00Z".to_string(),
    }
}

// ─── recording screen ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Region(ListRegion),
    ShowModal(ModalView),
    HideModal,
    Alert(String),
    Confirm(String),
    ResetForm,
    SubmitLabel(String),
}

/// Screen that remembers everything drawn on it and answers confirmations
/// from a queue (empty queue answers no).
#[derive(Default)]
pub struct RecordingScreen {
    pub events: Vec<Event>,
    pub answers: VecDeque<bool>,
    pub modal: Option<ModalView>,
    pub region: Option<ListRegion>,
    pub submit_label: Option<String>,
}

impl RecordingScreen {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Alert(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

#[async_trait]
impl Screen for RecordingScreen {
    fn show_region(&mut self, region: &ListRegion) {
        self.region = Some(region.clone());
        self.events.push(Event::Region(region.clone()));
    }

    fn show_modal(&mut self, modal: &ModalView) {
        self.modal = Some(modal.clone());
        self.events.push(Event::ShowModal(modal.clone()));
    }

    fn hide_modal(&mut self) {
        self.modal = None;
        self.events.push(Event::HideModal);
    }

    fn alert(&mut self, message: &str) {
        self.events.push(Event::Alert(message.to_string()));
    }

    async fn confirm(&mut self, question: &str) -> bool {
        self.events.push(Event::Confirm(question.to_string()));
        self.answers.pop_front().unwrap_or(false)
    }

    fn reset_form(&mut self) {
        self.events.push(Event::ResetForm);
    }

    fn set_submit_label(&mut self, label: &str) {
        self.submit_label = Some(label.to_string());
        self.events.push(Event::SubmitLabel(label.to_string()));
    }
}
