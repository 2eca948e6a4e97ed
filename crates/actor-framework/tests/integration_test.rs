use actor_framework::{
    Actor, ActorContext, ActorFault, ActorRef, ActorSystem, FrameworkError, Props, ReplyTo,
    Terminated,
};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;

const WAIT: Duration = Duration::from_secs(1);

// --- Test Actor ---

/// `seen` lives in the behaviour and is lost on restart; the total lives in the
/// persistent slot and must survive.
struct Tally {
    seen: u32,
}

#[derive(Debug)]
enum TallyMsg {
    Add(u64),
    Fail,
    Panic,
    Hang(ReplyTo<u64>),
    Snapshot(ReplyTo<(u64, u32)>),
    Restarts(ReplyTo<Vec<String>>),
    Quit,
}

#[derive(Default)]
struct TallyState {
    total: u64,
    restart_causes: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
#[error("tally refused")]
struct TallyError;

#[async_trait]
impl Actor for Tally {
    type Msg = TallyMsg;
    type State = TallyState;
    type Error = TallyError;

    async fn handle(
        &mut self,
        ctx: &mut ActorContext<Self>,
        state: &mut TallyState,
        msg: TallyMsg,
    ) -> Result<(), TallyError> {
        self.seen += 1;
        match msg {
            TallyMsg::Add(n) => state.total += n,
            TallyMsg::Fail => return Err(TallyError),
            TallyMsg::Panic => panic!("tally exploded"),
            TallyMsg::Hang(_reply_to) => return Err(TallyError),
            TallyMsg::Snapshot(reply_to) => {
                let _ = reply_to.send((state.total, self.seen));
            }
            TallyMsg::Restarts(reply_to) => {
                let _ = reply_to.send(state.restart_causes.clone());
            }
            TallyMsg::Quit => ctx.stop(),
        }
        Ok(())
    }

    async fn post_restart(
        &mut self,
        _ctx: &mut ActorContext<Self>,
        state: &mut TallyState,
        cause: &ActorFault,
    ) -> Result<(), TallyError> {
        state.restart_causes.push(cause.to_string());
        Ok(())
    }
}

fn spawn_tally(system: &ActorSystem) -> ActorRef<TallyMsg> {
    system.spawn("tally", Props::new(|| Tally { seen: 0 }))
}

async fn snapshot(tally: &ActorRef<TallyMsg>) -> (u64, u32) {
    tally.ask(TallyMsg::Snapshot, WAIT).await.unwrap()
}

// --- Tests ---

#[tokio::test]
async fn test_messages_are_processed_in_order() {
    let system = ActorSystem::new("test");
    let tally = spawn_tally(&system);

    for n in 1..=10 {
        tally.tell(TallyMsg::Add(n)).unwrap();
    }

    assert_eq!(snapshot(&tally).await, (55, 11));
    system.shutdown().await;
}

#[tokio::test]
async fn test_restart_keeps_identity_and_persistent_state() {
    let system = ActorSystem::new("test");
    let tally = spawn_tally(&system);

    tally.tell(TallyMsg::Add(7)).unwrap();
    tally.tell(TallyMsg::Fail).unwrap();
    tally.tell(TallyMsg::Add(3)).unwrap();

    // The behaviour was rebuilt (seen restarts from zero), the total was not.
    assert_eq!(snapshot(&tally).await, (10, 2));
    assert!(tally.is_alive());

    let causes = tally.ask(TallyMsg::Restarts, WAIT).await.unwrap();
    assert_eq!(causes, vec!["tally refused".to_string()]);

    system.shutdown().await;
}

#[tokio::test]
async fn test_panic_is_a_fault_too() {
    let system = ActorSystem::new("test");
    let tally = spawn_tally(&system);

    tally.tell(TallyMsg::Add(1)).unwrap();
    tally.tell(TallyMsg::Panic).unwrap();

    assert_eq!(snapshot(&tally).await, (1, 1));
    let causes = tally.ask(TallyMsg::Restarts, WAIT).await.unwrap();
    assert_eq!(causes, vec!["panicked: tally exploded".to_string()]);

    system.shutdown().await;
}

#[tokio::test]
async fn test_ask_lost_to_a_crash_times_out_at_the_deadline() {
    let system = ActorSystem::new("test");
    let tally = spawn_tally(&system);
    let timeout = Duration::from_millis(50);

    let started = Instant::now();
    let result = tally.ask(TallyMsg::Hang, timeout).await;

    assert_eq!(result, Err(FrameworkError::AskTimeout(timeout)));
    assert!(started.elapsed() >= timeout);
    system.shutdown().await;
}

#[tokio::test]
async fn test_ask_to_stopped_actor_times_out() {
    let system = ActorSystem::new("test");
    let tally = spawn_tally(&system);
    system.shutdown().await;

    assert!(!tally.is_alive());
    assert_eq!(tally.tell(TallyMsg::Add(1)), Err(FrameworkError::ActorClosed));

    let timeout = Duration::from_millis(20);
    let result = tally.ask(TallyMsg::Snapshot, timeout).await;
    assert_eq!(result, Err(FrameworkError::AskTimeout(timeout)));
}

#[tokio::test]
async fn test_late_reply_is_discarded() {
    let system = ActorSystem::new("test");
    let mut probe = system.probe::<TallyMsg>("slow");

    let result = probe
        .actor_ref()
        .ask(TallyMsg::Snapshot, Duration::from_millis(10))
        .await;
    assert!(matches!(result, Err(FrameworkError::AskTimeout(_))));

    let TallyMsg::Snapshot(reply_to) = probe.expect_msg(WAIT).await else {
        panic!("expected a snapshot request");
    };
    assert_eq!(reply_to.send((0, 0)), Err(FrameworkError::ReplyDropped));
}

// --- Watching ---

struct Watcher {
    target: ActorRef<TallyMsg>,
    report: ActorRef<Terminated>,
}

#[derive(Debug)]
enum WatcherMsg {
    Gone(Terminated),
}

#[async_trait]
impl Actor for Watcher {
    type Msg = WatcherMsg;
    type State = ();
    type Error = std::convert::Infallible;

    async fn pre_start(
        &mut self,
        ctx: &mut ActorContext<Self>,
        _state: &mut (),
    ) -> Result<(), Self::Error> {
        ctx.watch(&self.target, WatcherMsg::Gone);
        Ok(())
    }

    async fn handle(
        &mut self,
        _ctx: &mut ActorContext<Self>,
        _state: &mut (),
        msg: WatcherMsg,
    ) -> Result<(), Self::Error> {
        match msg {
            WatcherMsg::Gone(terminated) => {
                let _ = self.report.tell(terminated);
            }
        }
        Ok(())
    }
}

fn spawn_watcher(
    system: &ActorSystem,
    target: &ActorRef<TallyMsg>,
    report: &ActorRef<Terminated>,
) -> ActorRef<WatcherMsg> {
    let (target, report) = (target.clone(), report.clone());
    system.spawn(
        "watcher",
        Props::new(move || Watcher {
            target: target.clone(),
            report: report.clone(),
        }),
    )
}

#[tokio::test]
async fn test_watcher_is_notified_once_when_target_stops() {
    let system = ActorSystem::new("test");
    let tally = spawn_tally(&system);
    let mut report = system.probe::<Terminated>("report");
    let _watcher = spawn_watcher(&system, &tally, &report.actor_ref());

    // Let the watch land, then stop the target from the inside.
    tokio::time::sleep(Duration::from_millis(20)).await;
    tally.tell(TallyMsg::Quit).unwrap();

    let terminated = report.expect_msg(WAIT).await;
    assert_eq!(terminated.actor, tally.id());
    assert_eq!(&*terminated.path, "test/tally");
    report.expect_no_msg(Duration::from_millis(50)).await;

    system.shutdown().await;
}

#[tokio::test]
async fn test_watching_a_stopped_actor_notifies_immediately() {
    let system = ActorSystem::new("test");
    let tally = spawn_tally(&system);
    tally.stop();
    while tally.is_alive() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let mut report = system.probe::<Terminated>("report");
    let _watcher = spawn_watcher(&system, &tally, &report.actor_ref());

    assert_eq!(report.expect_msg(WAIT).await.actor, tally.id());
    system.shutdown().await;
}

/// Watches and unwatches its target in the same breath as stopping it.
struct Bystander {
    report: ActorRef<Terminated>,
}

#[derive(Debug)]
enum BystanderMsg {
    StopAndLookAway(ActorRef<TallyMsg>),
    Gone(Terminated),
}

#[async_trait]
impl Actor for Bystander {
    type Msg = BystanderMsg;
    type State = ();
    type Error = std::convert::Infallible;

    async fn handle(
        &mut self,
        ctx: &mut ActorContext<Self>,
        _state: &mut (),
        msg: BystanderMsg,
    ) -> Result<(), Self::Error> {
        match msg {
            BystanderMsg::StopAndLookAway(target) => {
                target.stop();
                ctx.watch(&target, BystanderMsg::Gone);
                ctx.unwatch(&target);
            }
            BystanderMsg::Gone(terminated) => {
                let _ = self.report.tell(terminated);
            }
        }
        Ok(())
    }
}

#[tokio::test]
async fn test_unwatch_queued_behind_stop_is_honoured() {
    let system = ActorSystem::new("test");
    let tally = spawn_tally(&system);
    let mut report = system.probe::<Terminated>("report");
    let report_ref = report.actor_ref();
    let bystander = system.spawn(
        "bystander",
        Props::new(move || Bystander {
            report: report_ref.clone(),
        }),
    );

    bystander
        .tell(BystanderMsg::StopAndLookAway(tally.clone()))
        .unwrap();

    report.expect_no_msg(Duration::from_millis(100)).await;
    assert!(!tally.is_alive());
    system.shutdown().await;
}

// --- Children and pipes ---

struct Parent {
    child: Option<ActorRef<TallyMsg>>,
}

#[derive(Debug)]
enum ParentMsg {
    Child(ReplyTo<ActorRef<TallyMsg>>),
    ForwardTotal(ReplyTo<u64>),
    Fail,
}

#[derive(Debug, thiserror::Error)]
#[error("parent failed")]
struct ParentError;

#[async_trait]
impl Actor for Parent {
    type Msg = ParentMsg;
    type State = ();
    type Error = ParentError;

    async fn pre_start(
        &mut self,
        ctx: &mut ActorContext<Self>,
        _state: &mut (),
    ) -> Result<(), ParentError> {
        self.child = Some(ctx.spawn("child", Props::new(|| Tally { seen: 0 })));
        Ok(())
    }

    async fn handle(
        &mut self,
        ctx: &mut ActorContext<Self>,
        _state: &mut (),
        msg: ParentMsg,
    ) -> Result<(), ParentError> {
        let Some(child) = self.child.clone() else {
            return Err(ParentError);
        };
        match msg {
            ParentMsg::Child(reply_to) => {
                let _ = reply_to.send(child);
            }
            ParentMsg::ForwardTotal(reply_to) => {
                let ask = child.ask(TallyMsg::Snapshot, WAIT);
                ctx.pipe_to(async move { ask.await.ok().map(|(total, _)| total) }, reply_to);
            }
            ParentMsg::Fail => return Err(ParentError),
        }
        Ok(())
    }
}

#[tokio::test]
async fn test_children_follow_their_parent() {
    let system = ActorSystem::new("test");
    let parent = system.spawn("parent", Props::new(|| Parent { child: None }));

    let first = parent.ask(ParentMsg::Child, WAIT).await.unwrap();
    assert_eq!(first.path(), "test/parent/child");
    first.tell(TallyMsg::Add(4)).unwrap();
    assert_eq!(parent.ask(ParentMsg::ForwardTotal, WAIT).await, Ok(4));

    // A parent restart replaces its children.
    parent.tell(ParentMsg::Fail).unwrap();
    let second = parent.ask(ParentMsg::Child, WAIT).await.unwrap();
    assert_ne!(first, second);
    assert!(!first.is_alive());
    assert_eq!(parent.ask(ParentMsg::ForwardTotal, WAIT).await, Ok(0));

    // Stopping the parent stops the child.
    system.shutdown().await;
    assert!(!parent.is_alive());
    assert!(!second.is_alive());
}
