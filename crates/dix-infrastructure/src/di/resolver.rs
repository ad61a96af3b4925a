//! Resolution engine
//!
//! One resolution step runs three phases on a type and its hint:
//!
//! 1. **provide** - a provider registered for the hint's symbol produces
//!    the value
//! 2. **invoke** - for `from:?`, a binding is cloned out, or a structural
//!    default is synthesized
//! 3. **inject** - if the value is (or points to) a record, every hinted
//!    field still holding its zero value is resolved recursively
//!
//! No registry guard is held while a provider runs or while recursing.
//! Providers of a record's fields receive a context whose path includes that
//! record.

use dix_domain::{Context, Error, Hint, Instance, RecordRef, Result, TypeInfo};

use super::container::Container;
use crate::diagnostics;

impl Container {
    /// Resolve one value of `ty`, `None` when no phase produced one
    pub(crate) fn resolve_type(
        &self,
        ctx: &Context,
        ty: &TypeInfo,
        hint: &Hint,
    ) -> Result<Option<Instance>> {
        let produced = match self.provide(ctx, ty, hint)? {
            Some(value) => Some(value),
            None => self.invoke(ty, hint),
        };
        let Some(mut value) = produced else {
            return Ok(None);
        };
        if let Some(record) = ty.record_of(&mut value) {
            self.inject(ctx, record)?;
        }
        Ok(Some(value))
    }

    fn provide(&self, ctx: &Context, ty: &TypeInfo, hint: &Hint) -> Result<Option<Instance>> {
        let symbol = hint.symbol();
        if symbol.is_empty() {
            return Ok(None);
        }
        let namespace = hint.namespace_or(&self.default_namespace);
        let Some(provider) = self.providers.lookup(symbol, namespace) else {
            return Ok(None);
        };
        let value = provider.provide(ctx, hint)?;
        if !ty.matches(&value) {
            return Err(Error::type_mismatch(symbol, ty.name()));
        }
        Ok(Some(value))
    }

    fn invoke(&self, ty: &TypeInfo, hint: &Hint) -> Option<Instance> {
        if !hint.is_synthesize() {
            return None;
        }
        let namespace = hint.namespace_or(&self.default_namespace);
        let value = self
            .bindings
            .lookup(ty.id(), namespace)
            .unwrap_or_else(|| ty.synthesize(hint));
        Some(value)
    }

    fn inject(&self, ctx: &Context, mut record: RecordRef<'_>) -> Result<()> {
        let owner = record.type_name();
        let ctx = ctx.enter(record.type_id(), owner)?;
        let fields = self.fields.fields_of(&record);

        for field in fields.iter() {
            let (Some(descriptor), Some(field_type)) = (field.hint(), field.type_info()) else {
                continue;
            };
            if !field.is_zero(record.target()) {
                continue;
            }

            let mut hint = self.hints.acquire();
            hint.unmarshal_with(&self.hint_keys, descriptor);
            let resolved = self
                .resolve_type(&ctx, &field_type, &hint)
                .map_err(|e| Error::field_injection(owner, field.name(), field.type_name(), e))?;

            let Some(value) = resolved else {
                continue;
            };
            if !field.assign(record.target(), value) {
                return Err(Error::field_injection(
                    owner,
                    field.name(),
                    field.type_name(),
                    Error::type_mismatch(hint.symbol(), field.type_name()),
                ));
            }
            diagnostics::trace_injection(owner, field.name(), field.type_name(), descriptor);
        }
        Ok(())
    }
}
