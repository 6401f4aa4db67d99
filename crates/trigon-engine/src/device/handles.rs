//! Ownership of long-lived GPU handles.
//!
//! Release order is struct field order. Both holders are generic over the
//! handle types so the order can be checked without a GPU.

/// The handles of one GPU context, declared children first: surface, queue,
/// device, adapter, instance.
pub(crate) struct GpuHandles<S, Q, D, A, I> {
    pub(crate) surface: S,
    pub(crate) queue: Q,
    pub(crate) device: D,
    // Held only to keep the parents alive until the children are gone.
    _adapter: A,
    _instance: I,
}

impl<S, Q, D, A, I> GpuHandles<S, Q, D, A, I> {
    pub(crate) fn new(surface: S, queue: Q, device: D, adapter: A, instance: I) -> Self {
        Self {
            surface,
            queue,
            device,
            _adapter: adapter,
            _instance: instance,
        }
    }
}

/// A resource built from `parent` and released before it.
pub(crate) struct Layered<C, P> {
    pub(crate) child: C,
    pub(crate) parent: P,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Journal = Rc<RefCell<Vec<&'static str>>>;

    struct Handle {
        name: &'static str,
        journal: Journal,
    }

    impl Drop for Handle {
        fn drop(&mut self) {
            self.journal.borrow_mut().push(self.name);
        }
    }

    fn handle(journal: &Journal, name: &'static str) -> Handle {
        Handle {
            name,
            journal: Rc::clone(journal),
        }
    }

    fn handles(journal: &Journal) -> GpuHandles<Handle, Handle, Handle, Handle, Handle> {
        GpuHandles::new(
            handle(journal, "surface"),
            handle(journal, "queue"),
            handle(journal, "device"),
            handle(journal, "adapter"),
            handle(journal, "instance"),
        )
    }

    #[test]
    fn gpu_handles_release_children_first() {
        let journal = Journal::default();
        drop(handles(&journal));

        assert_eq!(
            *journal.borrow(),
            ["surface", "queue", "device", "adapter", "instance"]
        );
    }

    #[test]
    fn scene_resources_release_before_gpu() {
        let journal = Journal::default();
        let layered = Layered {
            child: handle(&journal, "pipeline"),
            parent: handles(&journal),
        };
        drop(layered);

        assert_eq!(
            *journal.borrow(),
            ["pipeline", "surface", "queue", "device", "adapter", "instance"]
        );
    }
}
