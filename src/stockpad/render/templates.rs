pub const LIST_TEMPLATE: &str = r##"{% if empty -%}
{{ message | style("empty") }}
{%- else -%}
{% for card in cards -%}
{{ card.name | style("name") }} {{ ("#" ~ card.id) | style("id") }}
  {{ card.description }}
  Price: {{ card.price_text | style("price") }}   {{ card.stock_text | style("stock") }}{% if card.added %}   {{ card.added | style("added") }}{% endif %}
  Image: {{ card.image_url | style("image") }}
  {{ ("[edit " ~ card.id ~ "]") | style("action") }} {{ ("[delete " ~ card.id ~ "]") | style("action") }}
{% if not loop.last %}
{% endif %}
{%- endfor %}
{%- endif %}"##;

pub const CARD_TEMPLATE: &str = r##"{{ card.name | style("name") }} {{ ("#" ~ card.id) | style("id") }}
{{ rule | style("rule") }}
{{ card.description }}

Price: {{ card.price_text | style("price") }}
{{ card.stock_text | style("stock") }}
Image: {{ card.image_url | style("image") }} (alt: {{ card.image_alt }})
{%- if card.added %}
Added: {{ card.added | style("added") }}
{%- endif %}"##;
