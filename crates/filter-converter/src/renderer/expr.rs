use crate::{
    error::{ConvertError, OperatorPosition, Result},
    renderer::{Render, Renderer, key::strip_outer_quotes},
};
use filter_model::{Comparison, Expression, Group, Key, LogicalExpression, Operator, Value};
use tracing::warn;

impl Render for Expression {
    fn render(&self, r: &mut Renderer) -> Result<()> {
        r.enter()?;
        match self {
            Expression::Comparison(cmp) => cmp.render(r)?,
            Expression::Logical(logical) => logical.render(r)?,
            Expression::Group(group) => group.render(r)?,
        }
        r.leave();
        Ok(())
    }
}

impl Render for LogicalExpression {
    fn render(&self, r: &mut Renderer) -> Result<()> {
        check_operator(self.op, OperatorPosition::Logical)?;
        self.left.render(r)?;
        r.sql.push_str(self.op.symbol());
        self.right.render(r)
    }
}

impl Render for Comparison {
    fn render(&self, r: &mut Renderer) -> Result<()> {
        check_operator(self.op, OperatorPosition::Comparison)?;
        self.key.render(r)?;
        r.sql.push_str(self.op.symbol());
        self.value.render(r)
    }
}

impl Render for Group {
    fn render(&self, r: &mut Renderer) -> Result<()> {
        r.sql.push_str(r.dialect.open_group());
        self.inner.render(r)?;
        r.sql.push_str(r.dialect.close_group());
        Ok(())
    }
}

impl Render for Key {
    fn render(&self, r: &mut Renderer) -> Result<()> {
        let key = strip_outer_quotes(self.as_str());
        r.sql.push_str(&r.dialect.render_key(key));
        Ok(())
    }
}

impl Render for Value {
    fn render(&self, r: &mut Renderer) -> Result<()> {
        match self {
            Value::Scalar(scalar) => r.sql.push_str(&r.dialect.render_scalar(scalar)),
            Value::List(items) => {
                r.sql.push_str(r.dialect.open_range());
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        r.sql.push(',');
                    }
                    r.sql.push_str(&r.dialect.render_scalar(item));
                }
                r.sql.push_str(r.dialect.close_range());
            }
        }
        Ok(())
    }
}

fn check_operator(op: Operator, position: OperatorPosition) -> Result<()> {
    let allowed = match position {
        OperatorPosition::Comparison => op.is_comparison(),
        OperatorPosition::Logical => op.is_logical(),
    };
    if !allowed {
        warn!(operator = %op, %position, "unsupported operator in filter expression");
        return Err(ConvertError::UnsupportedOperator {
            operator: op,
            position,
        });
    }
    Ok(())
}
