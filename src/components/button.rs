use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub left_icon: Option<Html>,
    #[prop_or_default]
    pub container_class: Classes,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            id={props.id.clone()}
            class={classes!("pill-button", props.container_class.clone())}
        >
            { props.left_icon.clone().unwrap_or_default() }
            <span class="pill-button__label">{ props.title.clone() }</span>
            <style>
                {r#"
                .pill-button {
                    position: relative;
                    display: inline-flex;
                    align-items: center;
                    gap: 0.25rem;
                    overflow: hidden;
                    cursor: pointer;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.75rem 1.75rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #000;
                }
                .pill-button__label {
                    position: relative;
                    display: inline-flex;
                    overflow: hidden;
                }
                "#}
            </style>
        </button>
    }
}
