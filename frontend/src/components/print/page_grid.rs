use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct PageGridProps {
    /// Card slots per page; one grid row each.
    pub rows: usize,
    pub children: Children,
}

/// One printable sheet: an A4 landscape page holding a fixed-row card grid.
/// Page size and margins come from the stylesheet; only the row count is
/// dynamic.
pub struct PageGrid;

impl Component for PageGrid {
    type Message = ();
    type Properties = PageGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PageGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: 1fr;
             grid-template-rows: repeat({}, 1fr);
             gap: 4mm;",
            props.rows
        );

        html! {
            <div class="print-page" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
