//! Response bodies shaped like the real sources, for tests.

pub const BCV_HTML: &str = r#"<!DOCTYPE html>
<html lang="es">
<head><title>Banco Central de Venezuela</title></head>
<body>
<div class="view-content">
  <div id="euro" class="col-sm-12 col-xs-12">
    <div class="field-content"><div class="row recuadrotsmc">
      <div class="col-sm-6 col-xs-6"><img src="/sites/default/files/euro.png"> <span> EUR </span></div>
      <div class="col-sm-6 col-xs-6 centrado"><strong> 40,60419933 </strong></div>
    </div></div>
  </div>
  <div id="yuan" class="col-sm-12 col-xs-12">
    <div class="field-content"><div class="row recuadrotsmc">
      <div class="col-sm-6 col-xs-6"><img src="/sites/default/files/yuan.png"> <span> CNY </span></div>
      <div class="col-sm-6 col-xs-6 centrado"><strong> 5,27755927 </strong></div>
    </div></div>
  </div>
  <div id="lira" class="col-sm-12 col-xs-12">
    <div class="field-content"><div class="row recuadrotsmc">
      <div class="col-sm-6 col-xs-6"><img src="/sites/default/files/lira.png"> <span> TRY </span></div>
      <div class="col-sm-6 col-xs-6 centrado"><strong> 1,08164956 </strong></div>
    </div></div>
  </div>
  <div id="rublo" class="col-sm-12 col-xs-12">
    <div class="field-content"><div class="row recuadrotsmc">
      <div class="col-sm-6 col-xs-6"><img src="/sites/default/files/rublo.png"> <span> RUB </span></div>
      <div class="col-sm-6 col-xs-6 centrado"><strong> 0,38848062 </strong></div>
    </div></div>
  </div>
  <div id="dolar" class="col-sm-12 col-xs-12">
    <div class="field-content"><div class="row recuadrotsmc">
      <div class="col-sm-6 col-xs-6"><img src="/sites/default/files/dolar.png"> <span> USD </span></div>
      <div class="col-sm-6 col-xs-6 centrado"><strong> 37,03580000 </strong></div>
    </div></div>
  </div>
</div>
</body>
</html>"#;

pub const BINANCE_JSON: &str = r#"{
  "code": "000000",
  "message": null,
  "data": [
    {"adv": {"advNo": "11532", "tradeType": "SELL", "asset": "USDT", "fiatUnit": "VES", "price": "37.0358"}, "advertiser": {"nickName": "first"}},
    {"adv": {"advNo": "11533", "tradeType": "SELL", "asset": "USDT", "fiatUnit": "VES", "price": "37.1000"}, "advertiser": {"nickName": "second"}}
  ],
  "total": 2,
  "success": true
}"#;

pub const YADIO_JSON: &str = r#"{"request":{"amount":1,"from":"VES","to":"USD"},"rate":0.0270009,"timestamp":1728980000000}"#;

pub const MONITOR_FEED_HTML: &str = r#"<section class="tgme_channel_history js-message_history">
<div class="tgme_widget_message_wrap js-widget_message_wrap"><div class="tgme_widget_message js-widget_message" data-post="enparalelovzlatelegram/100">
  <div class="tgme_widget_message_text js-message_text" dir="auto">Siguenos en nuestras redes sociales</div>
</div></div>
<div class="tgme_widget_message_wrap js-widget_message_wrap"><div class="tgme_widget_message js-widget_message" data-post="enparalelovzlatelegram/101">
  <div class="tgme_widget_message_text js-message_text" dir="auto">🗓 14/10/2026<br/>🕒 9:00 AM<br/>💵 Dólar EnParaleloVzla<br/>🔺 Bs. 45,20<br/>Variación 0,41%</div>
</div></div>
<div class="tgme_widget_message_wrap js-widget_message_wrap"><div class="tgme_widget_message js-widget_message" data-post="enparalelovzlatelegram/102">
  <div class="tgme_widget_message_photo_wrap"></div>
</div></div>
<div class="tgme_widget_message_wrap js-widget_message_wrap"><div class="tgme_widget_message js-widget_message" data-post="enparalelovzlatelegram/103">
  <div class="tgme_widget_message_text js-message_text" dir="auto">🗓 14/10/2026<br/>🕐 1:00 PM<br/>💵 Dólar EnParaleloVzla<br/>🔺 Bs. 99,99<br/>Variación 1,02%</div>
</div></div>
</section>"#;
