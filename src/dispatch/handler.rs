//! Type-erased handler thunks (§4.2, §9 "type-erased handlers over
//! heterogeneous payloads").

// Layer 1: Standard library imports
// (none)

// Layer 3: Internal module imports
use super::context::DispatchContext;
use crate::message::{ParamDescriptor, Payload};

/// A registered handler: its declared parameter descriptors plus the thunk
/// that downcasts a validated [`Payload`] and calls the user function.
pub(crate) struct Handler<A> {
    pub(crate) descriptors: Vec<ParamDescriptor>,
    invoke: Box<dyn Fn(&mut A, Payload, &DispatchContext<'_>) + Send + Sync>,
}

impl<A> Handler<A> {
    pub(crate) fn call(&self, actor: &mut A, payload: Payload, ctx: &DispatchContext<'_>) {
        (self.invoke)(actor, payload, ctx);
    }
}

/// Zero-argument handler.
pub(crate) fn handler0<A: 'static>(
    f: impl Fn(&mut A, &DispatchContext<'_>) + Send + Sync + 'static,
) -> Handler<A> {
    Handler {
        descriptors: Vec::new(),
        invoke: Box::new(move |actor, _payload, ctx| f(actor, ctx)),
    }
}

/// One-argument handler.
pub(crate) fn handler1<A: 'static, T1: Send + 'static>(
    f: impl Fn(&mut A, T1, &DispatchContext<'_>) + Send + Sync + 'static,
) -> Handler<A> {
    Handler {
        descriptors: vec![ParamDescriptor::of::<T1>()],
        invoke: Box::new(move |actor, payload, ctx| {
            let mut values = payload.into_values();
            if values.len() != 1 {
                return;
            }
            if let Ok(v1) = values.remove(0).downcast::<T1>() {
                f(actor, *v1, ctx);
            }
        }),
    }
}

/// Two-argument handler.
pub(crate) fn handler2<A: 'static, T1: Send + 'static, T2: Send + 'static>(
    f: impl Fn(&mut A, T1, T2, &DispatchContext<'_>) + Send + Sync + 'static,
) -> Handler<A> {
    Handler {
        descriptors: vec![ParamDescriptor::of::<T1>(), ParamDescriptor::of::<T2>()],
        invoke: Box::new(move |actor, payload, ctx| {
            let mut values = payload.into_values();
            if values.len() != 2 {
                return;
            }
            let v2 = values.remove(1);
            let v1 = values.remove(0);
            if let (Ok(v1), Ok(v2)) = (v1.downcast::<T1>(), v2.downcast::<T2>()) {
                f(actor, *v1, *v2, ctx);
            }
        }),
    }
}

/// Three-argument handler.
pub(crate) fn handler3<A: 'static, T1: Send + 'static, T2: Send + 'static, T3: Send + 'static>(
    f: impl Fn(&mut A, T1, T2, T3, &DispatchContext<'_>) + Send + Sync + 'static,
) -> Handler<A> {
    Handler {
        descriptors: vec![
            ParamDescriptor::of::<T1>(),
            ParamDescriptor::of::<T2>(),
            ParamDescriptor::of::<T3>(),
        ],
        invoke: Box::new(move |actor, payload, ctx| {
            let mut values = payload.into_values();
            if values.len() != 3 {
                return;
            }
            let v3 = values.remove(2);
            let v2 = values.remove(1);
            let v1 = values.remove(0);
            if let (Ok(v1), Ok(v2), Ok(v3)) =
                (v1.downcast::<T1>(), v2.downcast::<T2>(), v3.downcast::<T3>())
            {
                f(actor, *v1, *v2, *v3, ctx);
            }
        }),
    }
}

/// Four-argument handler.
pub(crate) fn handler4<
    A: 'static,
    T1: Send + 'static,
    T2: Send + 'static,
    T3: Send + 'static,
    T4: Send + 'static,
>(
    f: impl Fn(&mut A, T1, T2, T3, T4, &DispatchContext<'_>) + Send + Sync + 'static,
) -> Handler<A> {
    Handler {
        descriptors: vec![
            ParamDescriptor::of::<T1>(),
            ParamDescriptor::of::<T2>(),
            ParamDescriptor::of::<T3>(),
            ParamDescriptor::of::<T4>(),
        ],
        invoke: Box::new(move |actor, payload, ctx| {
            let mut values = payload.into_values();
            if values.len() != 4 {
                return;
            }
            let v4 = values.remove(3);
            let v3 = values.remove(2);
            let v2 = values.remove(1);
            let v1 = values.remove(0);
            if let (Ok(v1), Ok(v2), Ok(v3), Ok(v4)) = (
                v1.downcast::<T1>(),
                v2.downcast::<T2>(),
                v3.downcast::<T3>(),
                v4.downcast::<T4>(),
            ) {
                f(actor, *v1, *v2, *v3, *v4, ctx);
            }
        }),
    }
}
