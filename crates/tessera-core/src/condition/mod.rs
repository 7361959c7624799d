use crate::{
    bind::{BindValues, BindVariables},
    error::ConditionError,
    name::Composite,
    obs::metrics,
    row::RowSnapshot,
    term::{Expression, Literal},
    types::Timestamp,
};
use tessera_primitives::{CollectionKind, ColumnDescriptor, ColumnKind};
use tracing::{trace, warn};

mod eval;


///
/// Condition
///
/// A prepared compare-and-set condition on one column. `prepare` fixes the
/// receiving column and the expected expression, `attach` supplies the
/// statement's bound values exactly once, and `applies_to` renders the
/// verdict against a row snapshot. A condition that does not hold is the
/// `Ok(false)` verdict, never an error.
///

#[derive(Clone, Debug)]
pub struct Condition {
    column: ColumnDescriptor,
    expected: Expression,
    bound: Option<BindValues>,
}

impl Condition {
    /// Prepare a condition on `receiver`. Refuses column types with no
    /// byte-stable comparable representation and constant literals whose
    /// shape cannot fit the column.
    pub fn prepare(
        receiver: ColumnDescriptor,
        expected: Expression,
    ) -> Result<Self, ConditionError> {
        if !receiver.cql_type().supports_conditions() {
            warn!(
                column = %receiver.name(),
                cql_type = %receiver.cql_type(),
                "condition refused at prepare"
            );
            metrics::record_unsupported_target();

            return Err(ConditionError::unsupported_condition_target(&receiver));
        }

        if let Expression::Literal(literal) = &expected {
            if !literal.matches_type(receiver.cql_type()) {
                return Err(ConditionError::prepare_invalid(format!(
                    "{} literal does not fit column '{}' of type {}",
                    literal.kind_name(),
                    receiver.name(),
                    receiver.cql_type(),
                )));
            }
        }

        metrics::record_prepare();

        Ok(Self {
            column: receiver,
            expected,
            bound: None,
        })
    }

    /// Attach the statement's bound values. Attaching twice is an
    /// invariant violation.
    pub fn attach(mut self, values: BindValues) -> Result<Self, ConditionError> {
        if self.bound.is_some() {
            return Err(ConditionError::condition_invariant(format!(
                "bound values were already attached to the condition on '{}'",
                self.column.name(),
            )));
        }

        metrics::record_attach();
        self.bound = Some(values);

        Ok(self)
    }

    /// Report the receiver of every marker in this condition, keyed by
    /// marker index, so statement metadata can describe the bind slots.
    pub fn collect_bind_variable_metadata(&self, collector: &mut BindVariables) {
        if let Expression::Marker { index } = self.expected {
            collector.add(index, self.column.clone());
        }
    }

    #[must_use]
    pub const fn column(&self) -> &ColumnDescriptor {
        &self.column
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.bound.is_some()
    }

    /// Whether two attached conditions restrict the same column to the
    /// same resolved value. Statement planners use this to deduplicate.
    pub fn equals_to(&self, other: &Self) -> Result<bool, ConditionError> {
        let mine = self.resolve()?;
        let theirs = other.resolve()?;

        Ok(self.column == other.column && mine == theirs)
    }

    /// Evaluate the condition against one row of `row`, addressed by
    /// `row_prefix`, as of `now`.
    pub fn applies_to<R>(
        &self,
        row_prefix: &Composite,
        row: &R,
        now: Timestamp,
    ) -> Result<bool, ConditionError>
    where
        R: RowSnapshot + ?Sized,
    {
        let expected = self.resolve()?;

        let held = match self.column.cql_type().collection_kind() {
            None => self.scalar_applies(expected, row_prefix, row, now)?,
            Some(kind) => self.collection_applies(kind, expected, row_prefix, row, now)?,
        };

        metrics::record_evaluation(held);
        trace!(column = %self.column.name(), held, "condition evaluated");

        Ok(held)
    }

    fn bound(&self) -> Result<&BindValues, ConditionError> {
        self.bound.as_ref().ok_or_else(|| {
            ConditionError::condition_invariant(format!(
                "the condition on '{}' was evaluated before bound values were attached",
                self.column.name(),
            ))
        })
    }

    fn resolve(&self) -> Result<Option<&Literal>, ConditionError> {
        let values = self.bound()?;

        Ok(self.expected.bind_and_get(values, &self.column)?)
    }

    /// Cell name of the scalar column within the row addressed by
    /// `row_prefix`. A compact value column is the row prefix itself.
    fn scalar_name(&self, row_prefix: &Composite) -> Result<Vec<u8>, ConditionError> {
        let name = match self.column.kind() {
            ColumnKind::CompactValue => row_prefix.build(),
            ColumnKind::Static => Composite::static_prefix()
                .push(self.column.name_bytes())?
                .build(),
            ColumnKind::Ordinary => row_prefix.clone().push(self.column.name_bytes())?.build(),
        };

        Ok(name)
    }

    /// Name prefix enclosing every element cell of the collection. Static
    /// collections live under the static prefix, not the row's.
    fn collection_prefix(&self, row_prefix: &Composite) -> Result<Composite, ConditionError> {
        let base = match self.column.kind() {
            ColumnKind::Static => Composite::static_prefix(),
            ColumnKind::Ordinary | ColumnKind::CompactValue => row_prefix.clone(),
        };

        Ok(base.push(self.column.name_bytes())?)
    }

    fn scalar_applies<R>(
        &self,
        expected: Option<&Literal>,
        row_prefix: &Composite,
        row: &R,
        now: Timestamp,
    ) -> Result<bool, ConditionError>
    where
        R: RowSnapshot + ?Sized,
    {
        let name = self.scalar_name(row_prefix)?;
        let live = row.cell(&name).filter(|cell| cell.is_live(now));

        let want = match expected {
            None => None,
            Some(Literal::Scalar(bytes)) => Some(bytes.as_slice()),
            Some(other) => {
                return Err(ConditionError::condition_invariant(format!(
                    "a {} literal reached the scalar comparator for column '{}'",
                    other.kind_name(),
                    self.column.name(),
                )));
            }
        };

        Ok(eval::scalar_matches(want, live))
    }

    fn collection_applies<R>(
        &self,
        kind: CollectionKind,
        expected: Option<&Literal>,
        row_prefix: &Composite,
        row: &R,
        now: Timestamp,
    ) -> Result<bool, ConditionError>
    where
        R: RowSnapshot + ?Sized,
    {
        let prefix = self.collection_prefix(row_prefix)?;
        let start = prefix.build();
        let end = prefix.build_end_of_range();
        let live = row.live_range(&start, &end, now);

        let held = match (kind, expected) {
            (_, None) => live.is_empty(),
            (CollectionKind::List, Some(Literal::List(elements))) => {
                eval::list_matches(elements, &live)
            }
            (CollectionKind::Set, Some(Literal::Set(elements))) => {
                eval::set_matches(elements, &live)?
            }
            (CollectionKind::Map, Some(Literal::Map(entries))) => {
                eval::map_matches(entries, &live)?
            }
            (_, Some(other)) => {
                return Err(ConditionError::condition_invariant(format!(
                    "a {} literal reached the {kind} comparator for column '{}'",
                    other.kind_name(),
                    self.column.name(),
                )));
            }
        };

        Ok(held)
    }
}
