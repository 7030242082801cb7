<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Close button on preview modal</description>
   <name>btn_ModalClose</name>
   <tag></tag>
   <elementGuidId>review-modal-close</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//div[@role='dialog']//button[contains(@aria-label, 'Close') or contains(@class, 'close')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[role='dialog'] button[aria-label*='Close'], .modal-close</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
